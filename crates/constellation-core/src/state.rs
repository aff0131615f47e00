//! Game state — the aggregate simulation model and the snapshot sent to
//! rendering/HUD collaborators.

use serde::{Deserialize, Serialize};

use crate::components::{Design, Modifier, Satellite};
use crate::constants::{shell_profile, STARTING_BUDGET, WIN_COVERAGE};
use crate::enums::{GamePhase, OrbitalShell};
use crate::events::{EventLogEntry, PendingEvent};
use crate::types::{month_label, Money};

/// The aggregate game state. Transitions replace collections wholesale —
/// a turn advance or a launch produces a new `GameState`, never a
/// partially mutated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Unclamped balance. Event penalties may drive it negative; it is
    /// only checked before voluntary spending.
    pub budget: Money,
    pub designs: Vec<Design>,
    pub satellites: Vec<Satellite>,
    /// Global coverage percentage, always in 0..=100.
    pub coverage: u32,
    /// Income accrued at each turn boundary, before income modifiers.
    pub income_per_turn: Money,
    /// Completed-turn counter. Turn 0 is January 2025.
    pub turn: u32,
    pub active_modifiers: Vec<Modifier>,
    /// Event log, most recent first.
    pub event_log: Vec<EventLogEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            budget: STARTING_BUDGET,
            designs: Vec::new(),
            satellites: Vec::new(),
            coverage: 0,
            income_per_turn: 0,
            turn: 0,
            active_modifiers: Vec::new(),
            event_log: Vec::new(),
        }
    }
}

/// Per-shell fleet tally for the HUD orbit summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellCount {
    pub shell: OrbitalShell,
    pub label: String,
    pub color: String,
    pub count: usize,
}

/// Complete visible state published to the frontend after each action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub budget: Money,
    pub coverage: u32,
    pub income_per_turn: Money,
    pub turn: u32,
    /// Calendar label for the current turn, e.g. "MAR 2026".
    pub month: String,
    /// Aggregate cost multiplier currently in force.
    pub cost_multiplier: f64,
    /// Aggregate income multiplier currently in force.
    pub income_multiplier: f64,
    /// True once coverage has reached the victory threshold.
    pub victory: bool,
    pub designs: Vec<Design>,
    pub satellites: Vec<Satellite>,
    pub shell_counts: Vec<ShellCount>,
    pub active_modifiers: Vec<Modifier>,
    pub event_log: Vec<EventLogEntry>,
    pub pending_event: Option<PendingEvent>,
}

impl GameState {
    /// Build the snapshot for the current state. Multipliers are supplied
    /// by the caller (the sim crate owns modifier aggregation).
    pub fn snapshot(
        &self,
        phase: GamePhase,
        cost_multiplier: f64,
        income_multiplier: f64,
        pending_event: Option<PendingEvent>,
    ) -> GameSnapshot {
        GameSnapshot {
            phase,
            budget: self.budget,
            coverage: self.coverage,
            income_per_turn: self.income_per_turn,
            turn: self.turn,
            month: month_label(self.turn),
            cost_multiplier,
            income_multiplier,
            victory: self.coverage >= WIN_COVERAGE,
            designs: self.designs.clone(),
            satellites: self.satellites.clone(),
            shell_counts: self.shell_counts(),
            active_modifiers: self.active_modifiers.clone(),
            event_log: self.event_log.clone(),
            pending_event,
        }
    }

    /// Tally the fleet by shell, skipping shells with no satellites.
    pub fn shell_counts(&self) -> Vec<ShellCount> {
        OrbitalShell::ALL
            .iter()
            .filter_map(|&shell| {
                let count = self.satellites.iter().filter(|s| s.shell == shell).count();
                if count == 0 {
                    return None;
                }
                let profile = shell_profile(shell);
                Some(ShellCount {
                    shell,
                    label: profile.label.to_string(),
                    color: profile.color.to_string(),
                    count,
                })
            })
            .collect()
    }
}

//! Game engine — owns the state, the seeded RNG, and identity counters.
//!
//! `GameEngine` is the single writer of game state. Actions are applied
//! synchronously and run to completion; invalid actions return with the
//! state unchanged. Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use constellation_core::commands::PlayerAction;
use constellation_core::components::{Design, Satellite};
use constellation_core::constants::shell_profile;
use constellation_core::enums::{AntennaType, GamePhase, ModifierKind, OrbitalShell};
use constellation_core::events::PendingEvent;
use constellation_core::state::{GameSnapshot, GameState};
use constellation_core::types::{DesignId, Money, SatelliteId};

use crate::coverage::{compute_coverage, income_for_coverage};
use crate::events::ResolveCtx;
use crate::modifiers;
use crate::orbit::{plane_transform, sample_orbit};
use crate::turn::advance_turn;

/// Configuration for starting a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same actions = same game.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine.
pub struct GameEngine {
    state: GameState,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_design_id: u64,
    next_satellite_id: u64,
    next_modifier_id: u64,
    pending_event: Option<PendingEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config, at the main menu.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_design_id: 0,
            next_satellite_id: 0,
            next_modifier_id: 0,
            pending_event: None,
        }
    }

    /// Apply a single player action. Invalid actions are silent no-ops.
    pub fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::NewGame => {
                self.state = GameState::default();
                self.next_design_id = 0;
                self.next_satellite_id = 0;
                self.next_modifier_id = 0;
                self.pending_event = None;
                self.phase = GamePhase::Playing;
            }
            PlayerAction::ReturnToMenu => {
                self.phase = GamePhase::MainMenu;
                self.pending_event = None;
            }
            PlayerAction::SaveDesign {
                id,
                name,
                shell,
                antenna,
            } => self.save_design(id, name, shell, antenna),
            PlayerAction::DeleteDesign { design_id } => {
                if self.phase == GamePhase::Playing {
                    self.state.designs.retain(|d| d.id != design_id);
                }
            }
            PlayerAction::LaunchSatellites {
                design_id,
                quantity,
            } => self.launch_satellites(design_id, quantity),
            PlayerAction::AdvanceTurn => self.advance_turn(),
            PlayerAction::DismissEvent => {
                self.pending_event = None;
            }
        }
    }

    /// Build the snapshot published to rendering/HUD collaborators.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot(
            self.phase,
            self.cost_multiplier(),
            modifiers::aggregate(&self.state.active_modifiers, ModifierKind::IncomeMultiplier),
            self.pending_event.clone(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get a read-only reference to the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Aggregate cost multiplier currently in force.
    pub fn cost_multiplier(&self) -> f64 {
        modifiers::aggregate(&self.state.active_modifiers, ModifierKind::CostMultiplier)
    }

    /// Effective per-unit cost of a design under the current multiplier.
    pub fn effective_unit_cost(&self, design: &Design) -> Money {
        (design.total_cost as f64 * self.cost_multiplier()).floor() as Money
    }

    fn save_design(
        &mut self,
        id: Option<DesignId>,
        name: String,
        shell: OrbitalShell,
        antenna: AntennaType,
    ) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }

        match id {
            Some(id) => {
                let design = Design::new(id, name, shell, antenna);
                if let Some(existing) = self.state.designs.iter_mut().find(|d| d.id == id) {
                    *existing = design;
                } else {
                    self.next_design_id = self.next_design_id.max(id.0 + 1);
                    self.state.designs.push(design);
                }
            }
            None => {
                let id = DesignId(self.next_design_id);
                self.next_design_id += 1;
                self.state.designs.push(Design::new(id, name, shell, antenna));
            }
        }
    }

    fn launch_satellites(&mut self, design_id: DesignId, quantity: u32) {
        if self.phase != GamePhase::Playing || quantity == 0 {
            return;
        }
        let design = match self.state.designs.iter().find(|d| d.id == design_id) {
            Some(d) => d.clone(),
            None => return,
        };

        let total_cost = self.effective_unit_cost(&design) * quantity as Money;
        if self.state.budget < total_cost {
            return;
        }

        let profile = shell_profile(design.shell);
        let mut satellites = self.state.satellites.clone();
        satellites.reserve(quantity as usize);
        for _ in 0..quantity {
            let elements = sample_orbit(&mut self.rng);
            let id = SatelliteId(self.next_satellite_id);
            self.next_satellite_id += 1;
            satellites.push(Satellite {
                id,
                design_id,
                coverage: design.coverage,
                shell: design.shell,
                color: profile.color.to_string(),
                altitude_offset: profile.altitude_offset,
                angular_speed: profile.angular_speed,
                inclination: elements.inclination,
                raan: elements.raan,
                initial_phase: elements.initial_phase,
                plane: plane_transform(elements.inclination, elements.raan),
            });
        }

        let coverage = compute_coverage(&satellites);
        self.state = GameState {
            budget: self.state.budget - total_cost,
            satellites,
            coverage,
            income_per_turn: income_for_coverage(coverage),
            ..self.state.clone()
        };
    }

    fn advance_turn(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let mut ctx = ResolveCtx::new(&mut self.rng, &mut self.next_modifier_id);
        let (next, report) = advance_turn(&self.state, &mut ctx);
        self.state = next;
        self.pending_event = Some(PendingEvent {
            title: report.title,
            category: report.category,
            description: report.description,
            effect_desc: report.effect_desc,
            income_earned: report.income_earned,
        });
    }
}

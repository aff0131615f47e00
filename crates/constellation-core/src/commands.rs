//! Player actions sent from the UI collaborator to the engine.
//!
//! Actions are applied synchronously against the current state snapshot.
//! Invalid actions (unknown ids, insufficient budget, non-positive
//! quantity, wrong phase) are absorbed as silent no-ops — the caller
//! observes no state change and must infer the rejection.

use serde::{Deserialize, Serialize};

use crate::enums::{AntennaType, OrbitalShell};
use crate::types::DesignId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerAction {
    /// Reset to a fresh state and enter the playing phase.
    NewGame,
    /// Leave the playing phase. State is discarded on the next `NewGame`.
    ReturnToMenu,

    /// Upsert a design: replace when `id` names an existing design,
    /// append a new one otherwise. Cost and coverage are re-derived from
    /// the shell/antenna pair on every save.
    SaveDesign {
        id: Option<DesignId>,
        name: String,
        shell: OrbitalShell,
        antenna: AntennaType,
    },
    /// Remove a design by identity. Satellites already launched from it
    /// are unaffected.
    DeleteDesign { design_id: DesignId },

    /// Launch `quantity` satellites of a design, debiting
    /// `floor(total_cost × cost multiplier) × quantity` from the budget.
    LaunchSatellites { design_id: DesignId, quantity: u32 },

    /// Advance one turn: age modifiers, collect income, resolve exactly
    /// one world event, append a log entry.
    AdvanceTurn,

    /// Clear the pending event notification.
    DismissEvent,
}

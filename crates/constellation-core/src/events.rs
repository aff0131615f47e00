//! Event effect records and the turn log.

use serde::{Deserialize, Serialize};

use crate::components::{Modifier, Satellite};
use crate::enums::EventCategory;
use crate::types::Money;

/// The resolved effect of one event template against one state snapshot.
///
/// Every resolver produces a structurally complete record: absent aspects
/// keep their defaults (zero delta, fleet unchanged, no new modifiers).
/// Only `effect_desc` is mandatory in spirit — resolvers always set it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Signed budget adjustment applied on top of turn income.
    pub budget_delta: Money,
    /// Replacement satellite collection. `None` means unchanged; hazard
    /// events that destroy satellites supply the survivor list here.
    pub new_satellites: Option<Vec<Satellite>>,
    /// Modifiers to add to the active set.
    pub new_modifiers: Vec<Modifier>,
    /// Narrative summary of what happened, for the log and UI.
    pub effect_desc: String,
}

/// An immutable record appended to the event log each turn.
/// The log is kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub turn: u32,
    pub title: String,
    pub category: EventCategory,
    pub effect_desc: String,
}

/// The notification surfaced to the UI after a turn resolves, cleared by
/// the `DismissEvent` action. Purely presentational — dismissing it has
/// no effect on the economic state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingEvent {
    pub title: String,
    pub category: EventCategory,
    pub description: String,
    pub effect_desc: String,
    /// Income collected at this turn boundary, shown alongside the event.
    pub income_earned: Money,
}

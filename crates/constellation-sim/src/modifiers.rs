//! Modifier ledger — aging and aggregation of temporary economic effects.

use constellation_core::components::Modifier;
use constellation_core::enums::ModifierKind;

/// Age all modifiers by one turn: decrement each countdown and drop any
/// that expire. Returns a new collection; the input is untouched.
///
/// Within a turn advance this runs before event resolution, so modifiers
/// added by this turn's event are not aged in the turn that created them.
pub fn tick(modifiers: &[Modifier]) -> Vec<Modifier> {
    modifiers
        .iter()
        .filter(|m| m.turns_remaining > 1)
        .map(|m| Modifier {
            turns_remaining: m.turns_remaining - 1,
            ..m.clone()
        })
        .collect()
}

/// Product of the values of all modifiers of the given kind; 1.0 when
/// none match. Kinds never cross-multiply — cost and income multipliers
/// are aggregated independently.
pub fn aggregate(modifiers: &[Modifier], kind: ModifierKind) -> f64 {
    modifiers
        .iter()
        .filter(|m| m.kind == kind)
        .map(|m| m.value)
        .product()
}

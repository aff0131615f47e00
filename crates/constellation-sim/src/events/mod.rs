//! World event system: a fixed catalog of templates, a uniform selector,
//! and the resolution context shared by all resolvers.

pub mod catalog;
pub mod hazards;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use constellation_core::components::Modifier;
use constellation_core::enums::{EventCategory, ModifierKind};
use constellation_core::events::EventOutcome;
use constellation_core::state::GameState;
use constellation_core::types::ModifierId;

pub use catalog::CATALOG;

/// Mutable context handed to resolvers: the engine RNG for hazard
/// sampling and the allocator for new modifier identities.
pub struct ResolveCtx<'a> {
    pub rng: &'a mut ChaCha8Rng,
    next_modifier_id: &'a mut u64,
}

impl<'a> ResolveCtx<'a> {
    pub fn new(rng: &'a mut ChaCha8Rng, next_modifier_id: &'a mut u64) -> Self {
        Self {
            rng,
            next_modifier_id,
        }
    }

    /// Allocate the next modifier identity.
    pub fn alloc_modifier_id(&mut self) -> ModifierId {
        let id = ModifierId(*self.next_modifier_id);
        *self.next_modifier_id += 1;
        id
    }

    /// Build a modifier with a freshly allocated identity.
    pub fn modifier(
        &mut self,
        kind: ModifierKind,
        value: f64,
        turns_remaining: u32,
        desc: &str,
    ) -> Modifier {
        Modifier {
            id: self.alloc_modifier_id(),
            kind,
            value,
            turns_remaining,
            desc: desc.to_string(),
        }
    }
}

/// A catalog entry. Templates are defined once in [`catalog::CATALOG`]
/// and never created or destroyed at runtime. Predicates read only the
/// state they are given; resolvers produce a complete [`EventOutcome`].
pub struct EventTemplate {
    /// Stable identity, unique across the catalog.
    pub id: &'static str,
    pub category: EventCategory,
    pub title: &'static str,
    /// Narrative shown in the event notification.
    pub description: &'static str,
    pub eligible: fn(&GameState) -> bool,
    pub resolve: fn(&GameState, &mut ResolveCtx) -> EventOutcome,
}

/// Pick this turn's event: filter the catalog by eligibility against the
/// given (post-modifier-tick) state and choose uniformly at random.
///
/// When nothing is eligible the first catalog entry is used regardless of
/// its own predicate. The catalog keeps that entry unconditionally
/// eligible, so the fallback is a safety net rather than a reachable
/// branch; applying its resolver unchecked matches the established
/// behavior of the game.
pub fn select_event(state: &GameState, rng: &mut ChaCha8Rng) -> &'static EventTemplate {
    let eligible: Vec<&'static EventTemplate> =
        CATALOG.iter().filter(|t| (t.eligible)(state)).collect();
    if eligible.is_empty() {
        return &CATALOG[0];
    }
    eligible[rng.gen_range(0..eligible.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for template in CATALOG {
            assert!(seen.insert(template.id), "duplicate template id {}", template.id);
        }
    }

    #[test]
    fn catalog_has_all_categories() {
        for category in [
            EventCategory::Financial,
            EventCategory::OrbitalHazard,
            EventCategory::MarketShift,
            EventCategory::Tech,
        ] {
            assert!(
                CATALOG.iter().any(|t| t.category == category),
                "no templates in {category:?}"
            );
        }
    }

    /// The fallback entry must be eligible in any state, including the
    /// empty starting state — otherwise the fallback could apply a
    /// resolver whose own preconditions fail.
    #[test]
    fn first_template_is_unconditionally_eligible() {
        let empty = GameState::default();
        assert!((CATALOG[0].eligible)(&empty));
    }

    #[test]
    fn selection_from_empty_state_only_yields_eligible_templates() {
        let empty = GameState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let template = select_event(&empty, &mut rng);
            assert!(
                (template.eligible)(&empty),
                "selected ineligible template {}",
                template.id
            );
        }
    }

    #[test]
    fn selection_is_deterministic_for_a_seed() {
        let empty = GameState::default();
        let picks_a: Vec<&str> = {
            let mut rng = ChaCha8Rng::seed_from_u64(23);
            (0..50).map(|_| select_event(&empty, &mut rng).id).collect()
        };
        let picks_b: Vec<&str> = {
            let mut rng = ChaCha8Rng::seed_from_u64(23);
            (0..50).map(|_| select_event(&empty, &mut rng).id).collect()
        };
        assert_eq!(picks_a, picks_b);
    }
}

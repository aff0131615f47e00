//! Turn controller — the single orchestrated state transition.

use constellation_core::enums::{EventCategory, ModifierKind};
use constellation_core::events::EventLogEntry;
use constellation_core::state::GameState;
use constellation_core::types::Money;

use crate::coverage::{compute_coverage, income_for_coverage};
use crate::events::{select_event, ResolveCtx};
use crate::modifiers;

/// What happened during one turn, for the event notification.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub title: String,
    pub category: EventCategory,
    pub description: String,
    pub effect_desc: String,
    pub income_earned: Money,
}

/// Advance one turn. Pure snapshot-to-snapshot: the input state is left
/// untouched and the returned state is complete — callers never observe a
/// partially applied turn.
///
/// Order matters: modifiers age first so an effect added by this turn's
/// event is still fresh next turn, then income is collected under the
/// aged multipliers, then exactly one event is selected and resolved
/// against the aged snapshot.
pub fn advance_turn(state: &GameState, ctx: &mut ResolveCtx) -> (GameState, TurnReport) {
    // 1. Age modifiers.
    let ticked = modifiers::tick(&state.active_modifiers);

    // 2. Collect income under the aged income multiplier.
    let income_multiplier = modifiers::aggregate(&ticked, ModifierKind::IncomeMultiplier);
    let income = (state.income_per_turn as f64 * income_multiplier).floor() as Money;

    // 3. Select and resolve exactly one event against the aged snapshot.
    let state_for_event = GameState {
        active_modifiers: ticked.clone(),
        ..state.clone()
    };
    let template = select_event(&state_for_event, ctx.rng);
    let outcome = (template.resolve)(&state_for_event, ctx);

    // 4-6. Merge modifiers, apply money, swap in any survivor fleet.
    let mut active_modifiers = ticked;
    active_modifiers.extend(outcome.new_modifiers);
    let budget = state.budget + income + outcome.budget_delta;
    let satellites = outcome
        .new_satellites
        .unwrap_or_else(|| state.satellites.clone());

    // Hazards may have shrunk the fleet; re-derive coverage and income.
    let coverage = compute_coverage(&satellites);
    let income_per_turn = income_for_coverage(coverage);

    // 7. Log the event against the turn that just completed.
    let mut event_log = Vec::with_capacity(state.event_log.len() + 1);
    event_log.push(EventLogEntry {
        turn: state.turn,
        title: template.title.to_string(),
        category: template.category,
        effect_desc: outcome.effect_desc.clone(),
    });
    event_log.extend(state.event_log.iter().cloned());

    let next = GameState {
        budget,
        designs: state.designs.clone(),
        satellites,
        coverage,
        income_per_turn,
        turn: state.turn + 1,
        active_modifiers,
        event_log,
    };
    let report = TurnReport {
        title: template.title.to_string(),
        category: template.category,
        description: template.description.to_string(),
        effect_desc: outcome.effect_desc,
        income_earned: income,
    };
    (next, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_core::components::Modifier;
    use constellation_core::types::ModifierId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn advance(state: &GameState, seed: u64) -> (GameState, TurnReport) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut next_modifier_id = 100;
        let mut ctx = ResolveCtx::new(&mut rng, &mut next_modifier_id);
        advance_turn(state, &mut ctx)
    }

    #[test]
    fn turn_counter_advances_by_exactly_one() {
        let state = GameState::default();
        let (next, _) = advance(&state, 1);
        assert_eq!(next.turn, 1);
        let (after, _) = advance(&next, 2);
        assert_eq!(after.turn, 2);
    }

    #[test]
    fn expiring_modifier_is_gone_after_one_turn() {
        let mut state = GameState::default();
        state.active_modifiers = vec![Modifier {
            id: ModifierId(0),
            kind: ModifierKind::IncomeMultiplier,
            value: 1.4,
            turns_remaining: 1,
            desc: "boom".into(),
        }];

        let (next, _) = advance(&state, 1);
        assert_eq!(next.turn, 1);
        // The expiring modifier is aged out; the event may have added
        // fresh ones, which must all be full-lifetime.
        assert!(next.active_modifiers.iter().all(|m| m.id != ModifierId(0)));
    }

    #[test]
    fn event_modifiers_are_not_aged_on_creation_turn() {
        // Roll turns until some event adds a modifier; it must arrive
        // with its full duration intact.
        let state = GameState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut next_modifier_id = 0;
        let mut current = state;
        for _ in 0..30 {
            let mut ctx = ResolveCtx::new(&mut rng, &mut next_modifier_id);
            let before_ids: Vec<ModifierId> =
                current.active_modifiers.iter().map(|m| m.id).collect();
            let (next, _) = advance_turn(&current, &mut ctx);
            for m in &next.active_modifiers {
                if !before_ids.contains(&m.id) {
                    assert!(m.turns_remaining >= 2, "fresh modifier already aged");
                }
            }
            current = next;
        }
    }

    #[test]
    fn exactly_one_log_entry_per_turn_most_recent_first() {
        let mut state = GameState::default();
        for seed in 0..5 {
            let (next, _) = advance(&state, seed);
            assert_eq!(next.event_log.len(), state.event_log.len() + 1);
            assert_eq!(next.event_log[0].turn, state.turn);
            state = next;
        }
        // Newest first: turns run 4, 3, 2, 1, 0.
        let turns: Vec<u32> = state.event_log.iter().map(|e| e.turn).collect();
        assert_eq!(turns, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn income_respects_income_multiplier() {
        let mut state = GameState::default();
        state.income_per_turn = 100_000;
        // A 2-turn 0.5x modifier survives the tick and halves this
        // turn's income.
        state.active_modifiers = vec![Modifier {
            id: ModifierId(0),
            kind: ModifierKind::IncomeMultiplier,
            value: 0.5,
            turns_remaining: 2,
            desc: "slump".into(),
        }];

        let (next, report) = advance(&state, 9);
        assert_eq!(report.income_earned, 50_000);
        // Budget moved by income plus whatever the event did.
        let event_delta = next.budget - state.budget - report.income_earned;
        assert!(event_delta.abs() <= 250_000);
    }

    #[test]
    fn input_state_is_never_mutated() {
        let mut state = GameState::default();
        state.income_per_turn = 40_000;
        let before = serde_json::to_string(&state).unwrap();
        let _ = advance(&state, 5);
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn coverage_is_rederived_after_hazard_losses() {
        // Force many turns on a large fleet; whenever the fleet shrinks,
        // coverage and income must match the survivor set.
        let profile = constellation_core::constants::shell_profile(
            constellation_core::enums::OrbitalShell::Leo550,
        );
        let mut state = GameState::default();
        state.satellites = (0..40)
            .map(|i| constellation_core::components::Satellite {
                id: constellation_core::types::SatelliteId(i),
                design_id: constellation_core::types::DesignId(0),
                coverage: 4,
                shell: constellation_core::enums::OrbitalShell::Leo550,
                color: profile.color.to_string(),
                altitude_offset: profile.altitude_offset,
                angular_speed: profile.angular_speed,
                inclination: 0.0,
                raan: 0.0,
                initial_phase: 0.0,
                plane: glam::Mat4::IDENTITY,
            })
            .collect();
        state.coverage = compute_coverage(&state.satellites);
        state.income_per_turn = income_for_coverage(state.coverage);

        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let mut next_modifier_id = 0;
        for _ in 0..40 {
            let mut ctx = ResolveCtx::new(&mut rng, &mut next_modifier_id);
            let (next, _) = advance_turn(&state, &mut ctx);
            assert_eq!(next.coverage, compute_coverage(&next.satellites));
            assert_eq!(next.income_per_turn, income_for_coverage(next.coverage));
            state = next;
        }
    }
}

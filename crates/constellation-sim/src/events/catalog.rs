//! The world event catalog: 22 templates across four categories.
//!
//! Templates pair an eligibility predicate with a resolver. Predicates
//! read only the state they are given; resolvers produce a complete
//! `EventOutcome` and draw any randomness from the `ResolveCtx`.
//!
//! The first entry must stay unconditionally eligible — it doubles as the
//! selector's fallback when nothing else qualifies.

use constellation_core::enums::{EventCategory, ModifierKind};
use constellation_core::events::EventOutcome;
use constellation_core::state::GameState;

use super::hazards::{shell_targeted_removal, uniform_removal};
use super::{EventTemplate, ResolveCtx};
use rand::Rng;

// --- Eligibility predicates ---

fn always(_: &GameState) -> bool {
    true
}

fn has_satellites(state: &GameState) -> bool {
    !state.satellites.is_empty()
}

fn fleet_at_least_5(state: &GameState) -> bool {
    state.satellites.len() >= 5
}

fn fleet_at_least_6(state: &GameState) -> bool {
    state.satellites.len() >= 6
}

fn fleet_at_least_8(state: &GameState) -> bool {
    state.satellites.len() >= 8
}

fn fleet_at_least_10(state: &GameState) -> bool {
    state.satellites.len() >= 10
}

fn fleet_over_20(state: &GameState) -> bool {
    state.satellites.len() > 20
}

fn coverage_at_least_5(state: &GameState) -> bool {
    state.coverage >= 5
}

fn coverage_at_least_10(state: &GameState) -> bool {
    state.coverage >= 10
}

fn coverage_at_least_15(state: &GameState) -> bool {
    state.coverage >= 15
}

fn budget_over_500k(state: &GameState) -> bool {
    state.budget > 500_000
}

fn first_year(state: &GameState) -> bool {
    state.turn < 12
}

fn past_first_half_year(state: &GameState) -> bool {
    state.turn >= 6
}

fn has_designs(state: &GameState) -> bool {
    !state.designs.is_empty()
}

// --- Financial resolvers: pure budget delta ---

fn resolve_subsidy(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: 150_000,
        effect_desc: "+$150,000 grant payment received.".to_string(),
        ..Default::default()
    }
}

fn resolve_insurance(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: 120_000,
        effect_desc: "+$120,000 insurance payout received.".to_string(),
        ..Default::default()
    }
}

fn resolve_venture_round(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: 250_000,
        effect_desc: "+$250,000 in fresh capital wired in.".to_string(),
        ..Default::default()
    }
}

fn resolve_spectrum_fee(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: -100_000,
        effect_desc: "-$100,000 spectrum license renewal fee.".to_string(),
        ..Default::default()
    }
}

fn resolve_lawsuit(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: -200_000,
        effect_desc: "-$200,000 paid to settle interference claims.".to_string(),
        ..Default::default()
    }
}

fn resolve_tax_audit(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: -150_000,
        effect_desc: "-$150,000 in back taxes and penalties.".to_string(),
        ..Default::default()
    }
}

fn resolve_roaming_deal(_: &GameState, _: &mut ResolveCtx) -> EventOutcome {
    EventOutcome {
        budget_delta: 180_000,
        effect_desc: "+$180,000 signing bonus from a carrier partner.".to_string(),
        ..Default::default()
    }
}

// --- Orbital hazard resolvers: destroy satellites OR apply one
// --- negative-leaning modifier, never both ---

fn resolve_micrometeoroids(state: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let count = ctx.rng.gen_range(1..=3);
    let (survivors, removed) = uniform_removal(&state.satellites, count, ctx.rng);
    EventOutcome {
        new_satellites: Some(survivors),
        effect_desc: format!("{removed} satellite(s) shredded by micrometeoroids."),
        ..Default::default()
    }
}

fn resolve_solar_flare(state: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let count = (state.satellites.len() / 20).max(1);
    let (survivors, removed) = uniform_removal(&state.satellites, count, ctx.rng);
    EventOutcome {
        new_satellites: Some(survivors),
        effect_desc: format!("{removed} satellite(s) fried by the radiation burst."),
        ..Default::default()
    }
}

fn resolve_debris_cascade(state: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    match shell_targeted_removal(&state.satellites, 0.30, ctx.rng) {
        Some(strike) => EventOutcome {
            new_satellites: Some(strike.survivors),
            effect_desc: format!(
                "Cascade in {}: {} satellite(s) destroyed.",
                strike.shell_label, strike.removed
            ),
            ..Default::default()
        },
        None => EventOutcome {
            effect_desc: "The debris field dispersed harmlessly.".to_string(),
            ..Default::default()
        },
    }
}

fn resolve_booster_breakup(state: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    match shell_targeted_removal(&state.satellites, 0.20, ctx.rng) {
        Some(strike) => EventOutcome {
            new_satellites: Some(strike.survivors),
            effect_desc: format!(
                "Fragments swept {}: {} satellite(s) lost.",
                strike.shell_label, strike.removed
            ),
            ..Default::default()
        },
        None => EventOutcome {
            effect_desc: "The breakup occurred clear of your orbits.".to_string(),
            ..Default::default()
        },
    }
}

fn resolve_launch_grounding(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        1.25,
        3,
        "Launch fleet grounded: +25% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs up 25% for 3 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_ground_outage(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::IncomeMultiplier,
        0.7,
        2,
        "Ground segment outage: -30% income",
    );
    EventOutcome {
        effect_desc: "Income down 30% for 2 months while stations recover.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

// --- Market shift resolvers: exactly one fixed modifier ---

fn resolve_component_glut(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        0.8,
        3,
        "Component glut: -20% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs down 20% for 3 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_chip_shortage(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        1.3,
        3,
        "Rad-hard chip shortage: +30% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs up 30% for 3 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_streaming_boom(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::IncomeMultiplier,
        1.4,
        2,
        "Streaming demand boom: +40% income",
    );
    EventOutcome {
        effect_desc: "Income up 40% for 2 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_price_war(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::IncomeMultiplier,
        0.75,
        2,
        "Bandwidth price war: -25% income",
    );
    EventOutcome {
        effect_desc: "Income down 25% for 2 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_rideshare_oversupply(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        0.75,
        2,
        "Rideshare oversupply: -25% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs down 25% for 2 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

// --- Tech resolvers: exactly one fixed modifier ---

fn resolve_reusable_booster(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        0.7,
        4,
        "Reusable booster milestone: -30% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs down 30% for 4 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_phased_array(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::IncomeMultiplier,
        1.25,
        3,
        "Phased-array breakthrough: +25% income",
    );
    EventOutcome {
        effect_desc: "Income up 25% for 3 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_ai_scheduling(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::IncomeMultiplier,
        1.2,
        3,
        "Autonomous scheduling: +20% income",
    );
    EventOutcome {
        effect_desc: "Income up 20% for 3 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

fn resolve_line_automation(_: &GameState, ctx: &mut ResolveCtx) -> EventOutcome {
    let modifier = ctx.modifier(
        ModifierKind::CostMultiplier,
        0.85,
        4,
        "Production line automation: -15% launch costs",
    );
    EventOutcome {
        effect_desc: "Launch costs down 15% for 4 months.".to_string(),
        new_modifiers: vec![modifier],
        ..Default::default()
    }
}

/// The complete, fixed event catalog.
pub static CATALOG: &[EventTemplate] = &[
    // Index 0 is the selector's fallback: keep it unconditionally eligible.
    EventTemplate {
        id: "gov_subsidy",
        category: EventCategory::Financial,
        title: "Rural Broadband Subsidy",
        description: "A government connectivity program selects your network \
                      for a rural coverage grant.",
        eligible: always,
        resolve: resolve_subsidy,
    },
    EventTemplate {
        id: "insurance_payout",
        category: EventCategory::Financial,
        title: "Insurance Payout",
        description: "An underwriter settles an old launch anomaly claim in \
                      your favor.",
        eligible: has_satellites,
        resolve: resolve_insurance,
    },
    EventTemplate {
        id: "venture_round",
        category: EventCategory::Financial,
        title: "Series B Closes",
        description: "Investors are excited about the constellation story and \
                      close an oversubscribed round.",
        eligible: first_year,
        resolve: resolve_venture_round,
    },
    EventTemplate {
        id: "spectrum_fee",
        category: EventCategory::Financial,
        title: "Spectrum License Renewal",
        description: "The regulator invoices the annual Ka-band license fee.",
        eligible: always,
        resolve: resolve_spectrum_fee,
    },
    EventTemplate {
        id: "interference_lawsuit",
        category: EventCategory::Financial,
        title: "Interference Lawsuit Settled",
        description: "A radio-astronomy consortium sued over downlink \
                      interference. Legal advises settling.",
        eligible: fleet_over_20,
        resolve: resolve_lawsuit,
    },
    EventTemplate {
        id: "tax_audit",
        category: EventCategory::Financial,
        title: "Surprise Tax Audit",
        description: "Auditors disallow your orbital-asset depreciation \
                      schedule.",
        eligible: budget_over_500k,
        resolve: resolve_tax_audit,
    },
    EventTemplate {
        id: "roaming_deal",
        category: EventCategory::Financial,
        title: "Carrier Roaming Deal",
        description: "A terrestrial carrier signs a backhaul roaming agreement \
                      against your footprint.",
        eligible: coverage_at_least_10,
        resolve: resolve_roaming_deal,
    },
    EventTemplate {
        id: "micrometeoroids",
        category: EventCategory::OrbitalHazard,
        title: "Micrometeoroid Swarm",
        description: "A dense micrometeoroid stream crosses your orbital \
                      lanes.",
        eligible: has_satellites,
        resolve: resolve_micrometeoroids,
    },
    EventTemplate {
        id: "solar_flare",
        category: EventCategory::OrbitalHazard,
        title: "X-Class Solar Flare",
        description: "A coronal mass ejection drives a severe geomagnetic \
                      storm through the fleet.",
        eligible: fleet_at_least_5,
        resolve: resolve_solar_flare,
    },
    EventTemplate {
        id: "debris_cascade",
        category: EventCategory::OrbitalHazard,
        title: "Debris Cascade",
        description: "Two derelict spacecraft collide; the fragment cloud \
                      spreads through one altitude band.",
        eligible: fleet_at_least_6,
        resolve: resolve_debris_cascade,
    },
    EventTemplate {
        id: "booster_breakup",
        category: EventCategory::OrbitalHazard,
        title: "Defunct Booster Breakup",
        description: "A decades-old upper stage ruptures, peppering a shell \
                      with shrapnel.",
        eligible: fleet_at_least_8,
        resolve: resolve_booster_breakup,
    },
    EventTemplate {
        id: "launch_grounding",
        category: EventCategory::OrbitalHazard,
        title: "Launch Fleet Grounded",
        description: "A pad anomaly grounds your primary launch provider \
                      pending investigation.",
        eligible: always,
        resolve: resolve_launch_grounding,
    },
    EventTemplate {
        id: "ground_outage",
        category: EventCategory::OrbitalHazard,
        title: "Ground Segment Outage",
        description: "A fiber cut isolates two gateway stations; traffic \
                      reroutes at reduced capacity.",
        eligible: has_satellites,
        resolve: resolve_ground_outage,
    },
    EventTemplate {
        id: "component_glut",
        category: EventCategory::MarketShift,
        title: "Component Market Glut",
        description: "A rival constellation cancels, flooding the market with \
                      flight-qualified parts.",
        eligible: always,
        resolve: resolve_component_glut,
    },
    EventTemplate {
        id: "chip_shortage",
        category: EventCategory::MarketShift,
        title: "Rad-Hard Chip Shortage",
        description: "The sole rad-hard FPGA foundry slips its deliveries by \
                      two quarters.",
        eligible: always,
        resolve: resolve_chip_shortage,
    },
    EventTemplate {
        id: "streaming_boom",
        category: EventCategory::MarketShift,
        title: "Streaming Demand Boom",
        description: "A hit release strains terrestrial networks; subscribers \
                      flock to satellite broadband.",
        eligible: coverage_at_least_5,
        resolve: resolve_streaming_boom,
    },
    EventTemplate {
        id: "price_war",
        category: EventCategory::MarketShift,
        title: "Bandwidth Price War",
        description: "A competitor slashes prices to defend market share. You \
                      match them.",
        eligible: coverage_at_least_15,
        resolve: resolve_price_war,
    },
    EventTemplate {
        id: "rideshare_oversupply",
        category: EventCategory::MarketShift,
        title: "Rideshare Oversupply",
        description: "Empty manifest slots push rideshare prices to record \
                      lows.",
        eligible: always,
        resolve: resolve_rideshare_oversupply,
    },
    EventTemplate {
        id: "reusable_booster",
        category: EventCategory::Tech,
        title: "Reusable Booster Milestone",
        description: "Your launch provider lands and reflies a booster for the \
                      twentieth time.",
        eligible: always,
        resolve: resolve_reusable_booster,
    },
    EventTemplate {
        id: "phased_array",
        category: EventCategory::Tech,
        title: "Phased-Array Breakthrough",
        description: "The RF team doubles beam-steering throughput with a \
                      firmware update.",
        eligible: has_designs,
        resolve: resolve_phased_array,
    },
    EventTemplate {
        id: "ai_scheduling",
        category: EventCategory::Tech,
        title: "Autonomous Scheduling Rollout",
        description: "Fleet-wide autonomous beam scheduling cuts idle \
                      transponder time.",
        eligible: fleet_at_least_10,
        resolve: resolve_ai_scheduling,
    },
    EventTemplate {
        id: "line_automation",
        category: EventCategory::Tech,
        title: "Production Line Automation",
        description: "The bus assembly line moves to lights-out manufacturing.",
        eligible: past_first_half_year,
        resolve: resolve_line_automation,
    },
];

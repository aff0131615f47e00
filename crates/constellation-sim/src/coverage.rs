//! Coverage model — probabilistic union of per-satellite contributions.

use constellation_core::components::Satellite;
use constellation_core::constants::MONTHLY_REVENUE_PER_COVERAGE_PCT;
use constellation_core::types::Money;

/// Global coverage percentage for a satellite collection.
///
/// Each satellite's contribution is treated as an independent probability
/// of covering an arbitrary point on the globe, so the fleet covers
/// `1 − Π(1 − pᵢ/100)`. Deliberately sub-additive: doubling identical
/// satellites never doubles coverage.
pub fn compute_coverage(satellites: &[Satellite]) -> u32 {
    if satellites.is_empty() {
        return 0;
    }
    let uncovered: f64 = satellites
        .iter()
        .map(|sat| 1.0 - sat.coverage as f64 / 100.0)
        .product();
    (((1.0 - uncovered) * 100.0).round() as u32).min(100)
}

/// Income accrued per turn at a given coverage level, before modifiers.
pub fn income_for_coverage(coverage: u32) -> Money {
    coverage as Money * MONTHLY_REVENUE_PER_COVERAGE_PCT
}

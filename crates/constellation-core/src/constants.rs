//! Simulation constants and tuning parameters.

use crate::enums::{AntennaType, OrbitalShell};
use crate::types::Money;

/// Starting budget for a new game.
pub const STARTING_BUDGET: Money = 1_000_000;

/// Revenue earned per coverage percentage point per turn (month).
pub const MONTHLY_REVENUE_PER_COVERAGE_PCT: Money = 10_000;

/// Coverage percentage at which global coverage is declared achieved.
pub const WIN_COVERAGE: u32 = 95;

/// Planet radius in render units. Orbital radii are offsets from this.
pub const GLOBE_RADIUS: f32 = 2.0;

/// Rendering cap — satellites beyond this count are retained in the data
/// model but not animated. Most recently launched units take priority.
pub const MAX_RENDERED_SATELLITES: usize = 10_000;

/// Static characteristics of an orbital shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellProfile {
    pub label: &'static str,
    /// Real altitude, for display only.
    pub altitude_km: u32,
    /// Orbit radius offset above `GLOBE_RADIUS` in render units.
    pub altitude_offset: f32,
    /// Orbital period in minutes, for display only.
    pub period_min: u32,
    /// Phase-angle accumulation rate (radians per render second).
    pub angular_speed: f32,
    /// Shell contribution to a design's per-unit cost.
    pub base_cost: Money,
    /// Display color, also used as the shell tag in hazard targeting.
    pub color: &'static str,
    pub desc: &'static str,
}

/// Static characteristics of an antenna type.
#[derive(Debug, Clone, Copy)]
pub struct AntennaProfile {
    pub label: &'static str,
    /// Coverage percentage contributed by one satellite with this antenna.
    pub coverage_pct: u32,
    /// Antenna contribution to a design's per-unit cost.
    pub cost: Money,
    pub desc: &'static str,
}

/// Get the static profile for an orbital shell.
pub fn shell_profile(shell: OrbitalShell) -> ShellProfile {
    match shell {
        OrbitalShell::Leo550 => ShellProfile {
            label: "LEO — 550 km",
            altitude_km: 550,
            altitude_offset: 0.35,
            period_min: 95,
            angular_speed: 1.4,
            base_cost: 80_000,
            color: "#00ffaa",
            desc: "Very low orbit. Cheapest shell, smallest footprint per satellite.",
        },
        OrbitalShell::Leo1200 => ShellProfile {
            label: "LEO — 1,200 km",
            altitude_km: 1200,
            altitude_offset: 0.55,
            period_min: 110,
            angular_speed: 1.0,
            base_cost: 120_000,
            color: "#44ddff",
            desc: "Low orbit. Strong coverage density for large constellations.",
        },
        OrbitalShell::Meo8000 => ShellProfile {
            label: "MEO — 8,000 km",
            altitude_km: 8000,
            altitude_offset: 0.75,
            period_min: 287,
            angular_speed: 0.65,
            base_cost: 300_000,
            color: "#ffaa00",
            desc: "GPS-like altitude. Wide coverage per satellite, higher cost.",
        },
        OrbitalShell::Geo35786 => ShellProfile {
            label: "GEO — 35,786 km",
            altitude_km: 35_786,
            altitude_offset: 1.5,
            period_min: 1436,
            angular_speed: 0.18,
            base_cost: 800_000,
            color: "#ff4488",
            desc: "Geostationary. Maximum footprint per satellite, highest cost.",
        },
    }
}

/// Get the static profile for an antenna type.
pub fn antenna_profile(antenna: AntennaType) -> AntennaProfile {
    match antenna {
        AntennaType::Narrow => AntennaProfile {
            label: "Narrow Beam",
            coverage_pct: 4,
            cost: 20_000,
            desc: "Basic spot beam. Minimal footprint, lowest cost.",
        },
        AntennaType::Regional => AntennaProfile {
            label: "Regional",
            coverage_pct: 12,
            cost: 60_000,
            desc: "Regional coverage area. Good for dense LEO constellations.",
        },
        AntennaType::Wide => AntennaProfile {
            label: "Wide Area",
            coverage_pct: 22,
            cost: 140_000,
            desc: "Large footprint. Fewer satellites needed for global coverage.",
        },
        AntennaType::Global => AntennaProfile {
            label: "Global Beam",
            coverage_pct: 34,
            cost: 280_000,
            desc: "Maximum coverage per satellite. Best for GEO deployments.",
        },
    }
}

/// Per-unit cost of a design: shell base cost plus antenna cost.
pub fn design_cost(shell: OrbitalShell, antenna: AntennaType) -> Money {
    shell_profile(shell).base_cost + antenna_profile(antenna).cost
}

/// Coverage contribution per unit of a design, from its antenna.
pub fn design_coverage(antenna: AntennaType) -> u32 {
    antenna_profile(antenna).coverage_pct
}

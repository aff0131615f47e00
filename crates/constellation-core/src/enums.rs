//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Orbital altitude band. Every satellite launched into a shell shares the
/// shell's altitude, angular speed, base cost, and display color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitalShell {
    /// Very low orbit. Cheapest shell, smallest footprint per satellite.
    #[default]
    Leo550,
    /// Low orbit. Strong coverage density for large constellations.
    Leo1200,
    /// GPS-like altitude. Wide coverage per satellite, higher cost.
    Meo8000,
    /// Geostationary. Maximum footprint per satellite, highest cost.
    Geo35786,
}

impl OrbitalShell {
    pub const ALL: [OrbitalShell; 4] = [
        OrbitalShell::Leo550,
        OrbitalShell::Leo1200,
        OrbitalShell::Meo8000,
        OrbitalShell::Geo35786,
    ];
}

/// Antenna fit determining a design's coverage contribution per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntennaType {
    /// Basic spot beam. Minimal footprint, lowest cost.
    #[default]
    Narrow,
    /// Regional coverage area. Good for dense LEO constellations.
    Regional,
    /// Large footprint. Fewer satellites needed for global coverage.
    Wide,
    /// Maximum coverage per satellite. Best for GEO deployments.
    Global,
}

impl AntennaType {
    pub const ALL: [AntennaType; 4] = [
        AntennaType::Narrow,
        AntennaType::Regional,
        AntennaType::Wide,
        AntennaType::Global,
    ];
}

/// World event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// One-off budget adjustment, positive or negative.
    Financial,
    /// Destroys satellites or degrades the economy.
    OrbitalHazard,
    /// Temporary cost or income multiplier from market conditions.
    MarketShift,
    /// Temporary cost or income multiplier from a technology change.
    Tech,
}

/// Which economic quantity a modifier scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Scales the effective per-unit launch cost.
    CostMultiplier,
    /// Scales income earned at each turn boundary.
    IncomeMultiplier,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
}

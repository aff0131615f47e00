//! Building blocks of the game state: designs, satellites, modifiers.
//!
//! These are plain data structs with no methods beyond constructors.
//! All transitions are performed by `constellation-sim`, which replaces
//! collections wholesale rather than mutating entries in place.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::constants::{design_cost, design_coverage};
use crate::enums::{AntennaType, ModifierKind, OrbitalShell};
use crate::types::{DesignId, ModifierId, Money, SatelliteId};

/// A named satellite blueprint. `total_cost` and `coverage` are derived
/// from the shell/antenna pair at save time and re-derived on every
/// edit-and-resave; they are never patched independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: DesignId,
    pub name: String,
    pub shell: OrbitalShell,
    pub antenna: AntennaType,
    /// Per-unit launch cost before any cost modifier.
    pub total_cost: Money,
    /// Coverage percentage contributed by one satellite of this design.
    pub coverage: u32,
}

impl Design {
    pub fn new(id: DesignId, name: String, shell: OrbitalShell, antenna: AntennaType) -> Self {
        Self {
            id,
            name,
            shell,
            antenna,
            total_cost: design_cost(shell, antenna),
            coverage: design_coverage(antenna),
        }
    }
}

/// A launched satellite. Orbital parameters are fixed at launch; the only
/// way a satellite leaves the fleet is removal by hazard-event resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: SatelliteId,
    pub design_id: DesignId,
    /// Coverage contribution, copied from the design at launch time.
    /// Editing the design later does not affect units already in orbit.
    pub coverage: u32,
    pub shell: OrbitalShell,
    /// Shell display color, duplicated here so renderers need no lookup.
    pub color: String,
    /// Orbit radius offset above the globe, in render units.
    pub altitude_offset: f32,
    /// Phase-angle accumulation rate (radians per render second).
    pub angular_speed: f32,
    /// Orbital-plane inclination, sampled uniformly in [0, π) at launch.
    pub inclination: f32,
    /// Right ascension of the ascending node, uniform in [0, 2π).
    pub raan: f32,
    /// Starting phase angle along the orbit, uniform in [0, 2π).
    pub initial_phase: f32,
    /// Cached orbital-plane rotation: RAAN about the polar axis, then
    /// inclination about the orthogonal axis. Fixed for the satellite's
    /// lifetime so renderers never re-derive it.
    pub plane: Mat4,
}

/// A temporary multiplicative economic effect. Created only by event
/// resolution, aged once per turn, removed when its countdown reaches
/// zero. Same-kind modifiers stack multiplicatively and are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: ModifierId,
    pub kind: ModifierKind,
    pub value: f64,
    pub turns_remaining: u32,
    pub desc: String,
}

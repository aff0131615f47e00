//! Orbital kinematics — fixed plane transforms and per-frame positions.
//!
//! A satellite's orbit is fully determined at launch: two sampled plane
//! angles compose a rotation that is cached on the satellite and never
//! re-derived. Frame-time work is one phase-angle accumulation and one
//! matrix-point transform per visible satellite.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use constellation_core::components::Satellite;
use constellation_core::constants::{GLOBE_RADIUS, MAX_RENDERED_SATELLITES};
use constellation_core::enums::OrbitalShell;
use constellation_core::types::SatelliteId;

/// Orbital-plane parameters sampled once at launch.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    /// Inclination, uniform in [0, π).
    pub inclination: f32,
    /// Right ascension of the ascending node, uniform in [0, 2π).
    pub raan: f32,
    /// Starting phase angle along the orbit, uniform in [0, 2π).
    pub initial_phase: f32,
}

/// Sample launch-time orbital elements from the engine RNG.
pub fn sample_orbit(rng: &mut ChaCha8Rng) -> OrbitalElements {
    OrbitalElements {
        inclination: rng.gen_range(0.0..PI),
        raan: rng.gen_range(0.0..TAU),
        initial_phase: rng.gen_range(0.0..TAU),
    }
}

/// Compose the fixed orbital-plane rotation: ascending-node rotation about
/// the polar axis, then inclination rotation about the orthogonal axis.
pub fn plane_transform(inclination: f32, raan: f32) -> Mat4 {
    Mat4::from_rotation_y(raan) * Mat4::from_rotation_z(inclination)
}

/// World position of one satellite, produced once per frame. Carries the
/// shell tag so renderers can color instances without a fleet lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitePoint {
    pub id: SatelliteId,
    pub shell: OrbitalShell,
    pub position: Vec3,
}

/// Per-frame propagator. Keeps each satellite's accumulated phase angle
/// keyed by identity, so motion is continuous across frames even as the
/// visible subset changes.
#[derive(Debug, Default)]
pub struct OrbitTracker {
    angles: HashMap<SatelliteId, f32>,
    last_fleet_size: usize,
}

impl OrbitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all visible satellites by `dt` seconds and return their
    /// world positions. When the fleet exceeds the rendering cap, only the
    /// most recently launched satellites (the tail of the collection) are
    /// propagated; older units keep their last accumulated angle.
    pub fn advance(&mut self, satellites: &[Satellite], dt: f32) -> Vec<SatellitePoint> {
        if satellites.len() < self.last_fleet_size {
            // Fleet shrank — drop angle entries for destroyed satellites.
            let live: std::collections::HashSet<SatelliteId> =
                satellites.iter().map(|s| s.id).collect();
            self.angles.retain(|id, _| live.contains(id));
        }
        self.last_fleet_size = satellites.len();

        let start = satellites.len().saturating_sub(MAX_RENDERED_SATELLITES);
        let visible = &satellites[start..];

        let mut points = Vec::with_capacity(visible.len());
        for sat in visible {
            let angle = self.angles.entry(sat.id).or_insert(sat.initial_phase);
            *angle += dt * sat.angular_speed;

            let radius = GLOBE_RADIUS + sat.altitude_offset;
            let in_plane = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
            points.push(SatellitePoint {
                id: sat.id,
                shell: sat.shell,
                position: sat.plane.transform_point3(in_plane),
            });
        }
        points
    }

    /// Accumulated phase angle for a satellite, if it has ever been drawn.
    pub fn angle_of(&self, id: SatelliteId) -> Option<f32> {
        self.angles.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constellation_core::constants::shell_profile;
    use constellation_core::enums::OrbitalShell;
    use constellation_core::types::DesignId;
    use rand::SeedableRng;

    fn sat_with_orbit(id: u64, elements: OrbitalElements) -> Satellite {
        let profile = shell_profile(OrbitalShell::Leo550);
        Satellite {
            id: SatelliteId(id),
            design_id: DesignId(0),
            coverage: 4,
            shell: OrbitalShell::Leo550,
            color: profile.color.to_string(),
            altitude_offset: profile.altitude_offset,
            angular_speed: profile.angular_speed,
            inclination: elements.inclination,
            raan: elements.raan,
            initial_phase: elements.initial_phase,
            plane: plane_transform(elements.inclination, elements.raan),
        }
    }

    #[test]
    fn sampled_angles_are_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let e = sample_orbit(&mut rng);
            assert!((0.0..PI).contains(&e.inclination));
            assert!((0.0..TAU).contains(&e.raan));
            assert!((0.0..TAU).contains(&e.initial_phase));
        }
    }

    #[test]
    fn plane_transform_preserves_orbit_radius() {
        // Pure rotation: every in-plane point keeps its distance from the
        // planet center after mapping into world space.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let e = sample_orbit(&mut rng);
            let m = plane_transform(e.inclination, e.raan);
            let radius = GLOBE_RADIUS + 0.35;
            let p = m.transform_point3(Vec3::new(radius, 0.0, 0.0));
            assert!((p.length() - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn angles_accumulate_across_frames() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sat = sat_with_orbit(0, sample_orbit(&mut rng));
        let speed = sat.angular_speed;
        let phase0 = sat.initial_phase;
        let fleet = vec![sat];

        let mut tracker = OrbitTracker::new();
        tracker.advance(&fleet, 0.1);
        tracker.advance(&fleet, 0.1);
        let angle = tracker.angle_of(SatelliteId(0)).unwrap();
        assert!((angle - (phase0 + 0.2 * speed)).abs() < 1e-5);
    }

    #[test]
    fn angle_continuity_survives_visible_subset_changes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = sat_with_orbit(0, sample_orbit(&mut rng));
        let b = sat_with_orbit(1, sample_orbit(&mut rng));

        let mut tracker = OrbitTracker::new();
        tracker.advance(&[a.clone()], 0.5);
        let angle_before = tracker.angle_of(SatelliteId(0)).unwrap();

        // A new launch changes the collection; the existing satellite's
        // accumulated angle must carry over, not reset to initial_phase.
        tracker.advance(&[a, b], 0.5);
        let angle_after = tracker.angle_of(SatelliteId(0)).unwrap();
        assert!(angle_after > angle_before);
        assert!((angle_after - angle_before - 0.5 * 1.4).abs() < 1e-5);
    }

    #[test]
    fn rendering_cap_limits_output_to_most_recent() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let fleet: Vec<Satellite> = (0..MAX_RENDERED_SATELLITES as u64 + 10)
            .map(|i| sat_with_orbit(i, sample_orbit(&mut rng)))
            .collect();

        let mut tracker = OrbitTracker::new();
        let points = tracker.advance(&fleet, 0.016);
        assert_eq!(points.len(), MAX_RENDERED_SATELLITES);
        // The oldest 10 satellites are not animated.
        assert_eq!(points[0].id, SatelliteId(10));
        assert!(tracker.angle_of(SatelliteId(0)).is_none());
    }

    #[test]
    fn destroyed_satellites_are_pruned_from_tracker() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let a = sat_with_orbit(0, sample_orbit(&mut rng));
        let b = sat_with_orbit(1, sample_orbit(&mut rng));

        let mut tracker = OrbitTracker::new();
        tracker.advance(&[a.clone(), b], 0.1);
        assert!(tracker.angle_of(SatelliteId(1)).is_some());

        tracker.advance(&[a], 0.1);
        assert!(tracker.angle_of(SatelliteId(1)).is_none());
        assert!(tracker.angle_of(SatelliteId(0)).is_some());
    }
}

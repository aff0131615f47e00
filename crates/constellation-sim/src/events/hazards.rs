//! Reusable hazard primitives shared by orbital-hazard resolvers.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use constellation_core::components::Satellite;
use constellation_core::constants::shell_profile;
use constellation_core::enums::OrbitalShell;

/// Remove `count` distinct uniformly random satellites from the fleet,
/// clamped to the fleet size. Survivors keep their relative order.
/// Returns the survivor list and the number actually removed.
pub fn uniform_removal(
    satellites: &[Satellite],
    count: usize,
    rng: &mut ChaCha8Rng,
) -> (Vec<Satellite>, usize) {
    let count = count.min(satellites.len());
    if count == 0 {
        return (satellites.to_vec(), 0);
    }

    let mut indices: Vec<usize> = (0..satellites.len()).collect();
    indices.shuffle(rng);
    let mut doomed = vec![false; satellites.len()];
    for &i in indices.iter().take(count) {
        doomed[i] = true;
    }

    let survivors = satellites
        .iter()
        .enumerate()
        .filter(|(i, _)| !doomed[*i])
        .map(|(_, sat)| sat.clone())
        .collect();
    (survivors, count)
}

/// Result of a shell-targeted strike, for the narrative.
#[derive(Debug)]
pub struct ShellStrike {
    pub survivors: Vec<Satellite>,
    pub removed: usize,
    pub shell: OrbitalShell,
    pub shell_label: &'static str,
}

/// Destroy a random fraction of one orbital shell's population.
///
/// The target shell is picked uniformly among the distinct shells present
/// in the fleet — not weighted by population — and at least one member of
/// it is always removed: `max(1, floor(shell_size × fraction))`, chosen by
/// a shuffle-and-take over indices local to the shell's subset. Returns
/// `None` for an empty fleet.
pub fn shell_targeted_removal(
    satellites: &[Satellite],
    fraction: f64,
    rng: &mut ChaCha8Rng,
) -> Option<ShellStrike> {
    if satellites.is_empty() {
        return None;
    }
    let present: Vec<OrbitalShell> = OrbitalShell::ALL
        .iter()
        .copied()
        .filter(|&shell| satellites.iter().any(|s| s.shell == shell))
        .collect();
    let shell = present[rng.gen_range(0..present.len())];

    let mut local: Vec<usize> = satellites
        .iter()
        .enumerate()
        .filter(|(_, s)| s.shell == shell)
        .map(|(i, _)| i)
        .collect();
    let removal_count = ((local.len() as f64 * fraction).floor() as usize).max(1);

    local.shuffle(rng);
    let mut doomed = vec![false; satellites.len()];
    for &i in local.iter().take(removal_count) {
        doomed[i] = true;
    }

    let survivors = satellites
        .iter()
        .enumerate()
        .filter(|(i, _)| !doomed[*i])
        .map(|(_, sat)| sat.clone())
        .collect();
    Some(ShellStrike {
        survivors,
        removed: removal_count,
        shell,
        shell_label: shell_profile(shell).label,
    })
}

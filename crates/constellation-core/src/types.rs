//! Fundamental identifier and currency types.

use serde::{Deserialize, Serialize};

/// Currency in whole dollars. Signed — event penalties can push the
/// budget below zero; only voluntary spending is gated on the balance.
pub type Money = i64;

/// Identity of a saved satellite design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignId(pub u64);

/// Identity of a launched satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SatelliteId(pub u64);

/// Identity of an active economic modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierId(pub u64);

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Calendar label for a turn index. Turn 0 is January 2025.
pub fn month_label(turn: u32) -> String {
    format!("{} {}", MONTHS[(turn % 12) as usize], 2025 + turn / 12)
}

//! Combat stat blocks.

use serde::{Deserialize, Serialize};

/// Starting health and combat stats for a newly created ant.
///
/// Health is signed: combat and resting can push it below zero, and an
/// ant is alive only while it stays above zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AntStats {
    /// Starting health.
    pub health: i32,
    /// Damage dealt before the opponent's defense is subtracted.
    pub attack: i32,
    /// Damage absorbed from each incoming hit.
    pub defense: i32,
}

impl AntStats {
    /// Build a stat block.
    pub const fn new(health: i32, attack: i32, defense: i32) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }
}

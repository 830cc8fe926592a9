//! Ant species.
//!
//! The species set is closed. Only some species have a stat preset in the
//! default configuration; the rest are part of the command vocabulary but
//! cannot be spawned unless a preset is configured for them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of creature an ant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Forager. Weak in a fight.
    Drone,
    /// Hunter and defender of the colony.
    Warrior,
    /// Egg layer; the toughest ant in the farm.
    Queen,
    /// Named in the command vocabulary, no default preset.
    Killer,
    /// Named in the command vocabulary, no default preset.
    Pansy,
}

impl Species {
    /// Every species, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Drone,
        Self::Warrior,
        Self::Queen,
        Self::Killer,
        Self::Pansy,
    ];

    /// Display name used in summaries and command tokens.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Drone => "Drone",
            Self::Warrior => "Warrior",
            Self::Queen => "Queen",
            Self::Killer => "Killer",
            Self::Pansy => "Pansy",
        }
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A species token did not match any known species.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown species: {token}")]
pub struct ParseSpeciesError {
    /// The token that failed to parse.
    pub token: String,
}

impl FromStr for Species {
    type Err = ParseSpeciesError;

    /// Parse a case-sensitive species token such as `Warrior`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|species| species.name() == s)
            .ok_or_else(|| ParseSpeciesError {
                token: s.to_owned(),
            })
    }
}

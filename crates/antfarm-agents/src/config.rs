//! Configuration for ant vitals and species stat presets.
//!
//! These values mirror the `vitals` and `presets` sections of
//! `antfarm-config.yaml`. Both structs deserialize with defaults for every
//! missing field, so an empty section yields the stock simulation.

use std::collections::BTreeMap;

use antfarm_types::{AntStats, Species};
use serde::Deserialize;

use crate::ant::Ant;
use crate::error::AgentError;

/// Health adjustments applied by the Active / Resting transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VitalsConfig {
    /// Health lost each time an ant is put to rest (default: 5).
    #[serde(default = "default_rest_penalty")]
    pub rest_penalty: i32,

    /// Health regained when a resting ant wakes up (default: 10).
    #[serde(default = "default_wake_recovery")]
    pub wake_recovery: i32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            rest_penalty: default_rest_penalty(),
            wake_recovery: default_wake_recovery(),
        }
    }
}

const fn default_rest_penalty() -> i32 {
    5
}

const fn default_wake_recovery() -> i32 {
    10
}

/// Species-indexed factory table.
///
/// The stock table knows Drone, Warrior, and Queen. Species without an
/// entry cannot be created; a configuration file may add entries for them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SpeciesPresets(BTreeMap<Species, AntStats>);

impl Default for SpeciesPresets {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        table.insert(Species::Drone, AntStats::new(80, 5, 3));
        table.insert(Species::Warrior, AntStats::new(120, 15, 8));
        table.insert(Species::Queen, AntStats::new(200, 20, 15));
        Self(table)
    }
}

impl SpeciesPresets {
    /// A table with no presets at all.
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace the preset for a species.
    pub fn insert(&mut self, species: Species, stats: AntStats) {
        self.0.insert(species, stats);
    }

    /// Look up the preset for a species.
    pub fn get(&self, species: Species) -> Option<AntStats> {
        self.0.get(&species).copied()
    }

    /// Whether the species can be created from this table.
    pub fn supports(&self, species: Species) -> bool {
        self.0.contains_key(&species)
    }

    /// Create a fresh ant of the given species.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::UnsupportedSpecies`] if the table has no
    /// preset for `species`.
    pub fn spawn(&self, species: Species) -> Result<Ant, AgentError> {
        self.get(species)
            .map(|stats| Ant::new(species, stats))
            .ok_or(AgentError::UnsupportedSpecies { species })
    }
}

//! A room: the ants of one colony and the per-tick policies applied to them.
//!
//! All iteration is in insertion order. No ant is prioritized by health,
//! species, or anything else.

use antfarm_agents::{Ant, SpeciesPresets, VitalsConfig};
use antfarm_types::{RoomId, Species};
use tracing::debug;

/// Outcome of one resting pass over a room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestReport {
    /// Ants put to rest this pass (never more than the room's capacity).
    pub rested: usize,
    /// Dead ants removed from the room at the end of the pass.
    pub pruned: usize,
    /// Status lines from each ant that rested, in order.
    pub messages: Vec<String>,
}

/// A room owning a set of ants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    ants: Vec<Ant>,
    max_resting_capacity: usize,
    /// Adjacent rooms. Stored for future traversal; no tick pass reads it.
    connections: Vec<RoomId>,
}

impl Room {
    /// Create an empty room that rests at most `max_resting_capacity` ants
    /// per pass.
    pub const fn new(max_resting_capacity: usize) -> Self {
        Self {
            ants: Vec::new(),
            max_resting_capacity,
            connections: Vec::new(),
        }
    }

    /// Build an ant of `species` from the preset table.
    ///
    /// Returns `None` for species without a preset.
    pub fn create_ant(species: Species, presets: &SpeciesPresets) -> Option<Ant> {
        presets.spawn(species).ok()
    }

    /// Append an ant. No uniqueness or capacity check is made.
    pub fn add_ant(&mut self, ant: Ant) {
        self.ants.push(ant);
    }

    /// Every ant currently owned by the room, dead ones included until the
    /// next resting pass prunes them.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Iterate over the living ants.
    pub fn living(&self) -> impl Iterator<Item = &Ant> {
        self.ants.iter().filter(|ant| ant.is_alive())
    }

    /// Number of owned ants.
    pub const fn len(&self) -> usize {
        self.ants.len()
    }

    /// Whether the room owns no ants.
    pub const fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    /// The per-pass resting capacity.
    pub const fn max_resting_capacity(&self) -> usize {
        self.max_resting_capacity
    }

    /// Record `other` as adjacent to this room. Duplicates are ignored.
    pub fn connect(&mut self, other: RoomId) {
        if !self.connections.contains(&other) {
            self.connections.push(other);
        }
    }

    /// Rooms adjacent to this one.
    pub fn connections(&self) -> &[RoomId] {
        &self.connections
    }

    /// Let every living ant act. Dead ants are skipped, not removed.
    pub fn interact(&self) -> Vec<String> {
        self.living().map(Ant::act).collect()
    }

    /// Advance every living ant's own state machine by one step.
    pub fn tick_ants(&mut self, vitals: &VitalsConfig) -> Vec<String> {
        self.ants
            .iter_mut()
            .filter(|ant| ant.is_alive())
            .map(|ant| ant.tick(vitals))
            .collect()
    }

    /// Rest living ants up to capacity, then prune the dead.
    ///
    /// Ants past the capacity are left untouched this pass. Pruning runs
    /// after resting, so an ant that rests itself to death is removed in
    /// the same call.
    pub fn rest_ants(&mut self, vitals: &VitalsConfig) -> RestReport {
        let mut report = RestReport::default();

        for ant in &mut self.ants {
            if !ant.is_alive() {
                continue;
            }
            if report.rested < self.max_resting_capacity {
                report.messages.push(ant.rest(vitals));
                report.rested = report.rested.saturating_add(1);
            }
        }

        report.pruned = self.remove_dead_ants();
        debug!(
            rested = report.rested,
            pruned = report.pruned,
            remaining = self.ants.len(),
            "Resting pass complete"
        );
        report
    }

    /// Render one four-line block per owned ant, in order.
    pub fn summary(&self) -> String {
        self.ants
            .iter()
            .map(|ant| {
                format!(
                    "Species: {}\nHealth: {}\nActive Ticks: {}\nStatus: {}\n",
                    ant.species(),
                    ant.health(),
                    ant.active_ticks(),
                    if ant.is_alive() { "Alive" } else { "Dead" },
                )
            })
            .collect()
    }

    fn remove_dead_ants(&mut self) -> usize {
        let before = self.ants.len();
        self.ants.retain(Ant::is_alive);
        before.saturating_sub(self.ants.len())
    }
}

//! The ant farm: every room, the colony index, and global ticking.
//!
//! Rooms are stored in creation order and are never removed. Colonies are
//! addressed by sequential [`ColonyId`]s starting at 1; an ID stays bound
//! to its room even after every ant in it has died.

use std::collections::BTreeMap;

use antfarm_agents::{SpeciesPresets, VitalsConfig};
use antfarm_types::{ColonyId, RoomId, Species};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::FarmError;
use crate::room::Room;

/// Returned by [`AntFarm::summary`] for an unknown colony ID.
pub const COLONY_NOT_FOUND: &str = "Colony not found.";

/// Aggregated counters from [`AntFarm::tick`].
///
/// Activity lines are not kept here; [`AntFarm::tick_with`] hands each one
/// to a callback as it happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of cycles executed.
    pub cycles: u64,
    /// Agent-level steps taken (only with `farm.agent_step`).
    pub stepped: usize,
    /// Ants put to rest across all rooms and cycles.
    pub rested: usize,
    /// `act` calls across all rooms and cycles.
    pub acted: usize,
    /// Dead ants pruned across all rooms and cycles.
    pub pruned: usize,
}

/// Owner of all rooms and the colony index.
#[derive(Debug, Clone)]
pub struct AntFarm {
    rooms: Vec<Room>,
    colonies: BTreeMap<ColonyId, RoomId>,
    colony_count: u32,
    room_capacity: usize,
    agent_step: bool,
    vitals: VitalsConfig,
    presets: SpeciesPresets,
}

impl Default for AntFarm {
    fn default() -> Self {
        Self::new()
    }
}

impl AntFarm {
    /// Create an empty farm with the stock configuration.
    pub fn new() -> Self {
        Self::with_config(&SimulationConfig::default())
    }

    /// Create an empty farm configured from `config`.
    pub fn with_config(config: &SimulationConfig) -> Self {
        Self {
            rooms: Vec::new(),
            colonies: BTreeMap::new(),
            colony_count: 0,
            room_capacity: config.farm.room_capacity,
            agent_step: config.farm.agent_step,
            vitals: config.vitals,
            presets: config.presets.clone(),
        }
    }

    /// Add an empty room with the given resting capacity.
    pub fn add_room(&mut self, capacity: usize) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(capacity));
        id
    }

    /// Create a colony holding one new ant of `species`.
    ///
    /// `x` and `y` are accepted for command compatibility and only logged;
    /// the simulation has no spatial model.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::UnsupportedSpecies`] if no preset exists for
    /// `species`, and [`FarmError::ColonyIdExhausted`] if no IDs remain.
    /// On error no room is created and no ID is consumed.
    pub fn spawn_colony(&mut self, species: Species, x: i32, y: i32) -> Result<ColonyId, FarmError> {
        let ant = Room::create_ant(species, &self.presets).ok_or_else(|| {
            warn!(%species, "Rejected colony spawn: no preset for species");
            FarmError::UnsupportedSpecies { species }
        })?;
        let colony_id = ColonyId(self.colony_count)
            .next()
            .ok_or(FarmError::ColonyIdExhausted)?;

        let room_id = self.add_room(self.room_capacity);
        if let Some(room) = self.rooms.get_mut(room_id.index()) {
            room.add_ant(ant);
        }

        self.colony_count = colony_id.get();
        self.colonies.insert(colony_id, room_id);

        info!(colony_id = %colony_id, %room_id, %species, x, y, "Colony spawned");
        Ok(colony_id)
    }

    /// Run `cycles` global ticks, discarding activity lines.
    pub fn tick(&mut self, cycles: u64) -> TickReport {
        self.tick_with(cycles, |_| {})
    }

    /// Run `cycles` global ticks, passing every activity line to
    /// `on_activity` in the order it happened.
    ///
    /// Each cycle visits every room in creation order and applies the
    /// resting pass, then the interaction pass. Resting ants still act.
    /// Nothing is buffered beyond a single room pass.
    pub fn tick_with<F>(&mut self, cycles: u64, mut on_activity: F) -> TickReport
    where
        F: FnMut(&str),
    {
        let mut report = TickReport {
            cycles,
            ..TickReport::default()
        };

        for cycle in 0..cycles {
            for room in &mut self.rooms {
                if self.agent_step {
                    let steps = room.tick_ants(&self.vitals);
                    report.stepped = report.stepped.saturating_add(steps.len());
                    steps.iter().for_each(|line| on_activity(line));
                }

                let rest = room.rest_ants(&self.vitals);
                report.rested = report.rested.saturating_add(rest.rested);
                report.pruned = report.pruned.saturating_add(rest.pruned);
                rest.messages.iter().for_each(|line| on_activity(line));

                let acts = room.interact();
                report.acted = report.acted.saturating_add(acts.len());
                acts.iter().for_each(|line| on_activity(line));
            }
            debug!(cycle, rooms = self.rooms.len(), "Cycle complete");
        }

        info!(
            cycles,
            rested = report.rested,
            acted = report.acted,
            pruned = report.pruned,
            population = self.population(),
            "Farm ticked"
        );
        report
    }

    /// Report on a colony, or [`COLONY_NOT_FOUND`] if the ID is unknown.
    pub fn summary(&self, id: ColonyId) -> String {
        self.room(id)
            .map_or_else(|| COLONY_NOT_FOUND.to_owned(), Room::summary)
    }

    /// Mark two colonies' rooms as adjacent to each other.
    ///
    /// # Errors
    ///
    /// Returns [`FarmError::ColonyNotFound`] if either ID is unknown.
    pub fn connect_colonies(&mut self, a: ColonyId, b: ColonyId) -> Result<(), FarmError> {
        let room_a = self.room_id(a).ok_or(FarmError::ColonyNotFound(a))?;
        let room_b = self.room_id(b).ok_or(FarmError::ColonyNotFound(b))?;
        if let Some(room) = self.rooms.get_mut(room_a.index()) {
            room.connect(room_b);
        }
        if let Some(room) = self.rooms.get_mut(room_b.index()) {
            room.connect(room_a);
        }
        debug!(%a, %b, "Colonies connected");
        Ok(())
    }

    /// The room backing a colony.
    pub fn room(&self, id: ColonyId) -> Option<&Room> {
        self.room_id(id)
            .and_then(|room_id| self.rooms.get(room_id.index()))
    }

    /// The room ID backing a colony.
    pub fn room_id(&self, id: ColonyId) -> Option<RoomId> {
        self.colonies.get(&id).copied()
    }

    /// All rooms in creation order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of colonies ever created.
    pub fn colony_count(&self) -> usize {
        self.colonies.len()
    }

    /// Number of rooms ever created.
    pub const fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Living ants across every room.
    pub fn population(&self) -> usize {
        self.rooms.iter().map(|room| room.living().count()).sum()
    }
}

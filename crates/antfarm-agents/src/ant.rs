//! The ant agent and its lifecycle.
//!
//! Each ant moves through three states:
//!
//! - **Active** -- the default. An agent-level [`Ant::tick`] counts an
//!   active tick.
//! - **Resting** -- entered through [`Ant::rest`], which costs health on
//!   every call. The next [`Ant::tick`] wakes the ant and restores health.
//! - **Dead** -- health at or below zero. Terminal; nothing transitions out.
//!
//! Status messages are returned to the caller rather than printed, so the
//! room and farm decide where activity output goes.

use antfarm_types::{AntId, AntStats, Species};
use tracing::debug;

use crate::combat;
use crate::config::VitalsConfig;

/// A single ant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    id: AntId,
    species: Species,
    health: i32,
    attack: i32,
    defense: i32,
    active_ticks: u64,
    resting: bool,
}

impl Ant {
    /// Create an active ant with the given starting stats.
    pub fn new(species: Species, stats: AntStats) -> Self {
        Self {
            id: AntId::new(),
            species,
            health: stats.health,
            attack: stats.attack,
            defense: stats.defense,
            active_ticks: 0,
            resting: false,
        }
    }

    /// Unique identity of this ant.
    pub const fn id(&self) -> AntId {
        self.id
    }

    /// The ant's species.
    pub const fn species(&self) -> Species {
        self.species
    }

    /// Current health. May be negative after a fatal blow.
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Attack stat.
    pub const fn attack(&self) -> i32 {
        self.attack
    }

    /// Defense stat.
    pub const fn defense(&self) -> i32 {
        self.defense
    }

    /// Number of agent-level ticks spent not resting.
    pub const fn active_ticks(&self) -> u64 {
        self.active_ticks
    }

    /// Whether the ant is currently resting.
    pub const fn is_resting(&self) -> bool {
        self.resting
    }

    /// An ant is alive exactly while its health is above zero.
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Put the ant to rest.
    ///
    /// Applies `rest_penalty` every time it is called, including when the
    /// ant is already resting. Returns the status line.
    pub fn rest(&mut self, vitals: &VitalsConfig) -> String {
        self.resting = true;
        self.health = self.health.saturating_sub(vitals.rest_penalty);
        debug!(ant_id = %self.id, species = %self.species, health = self.health, "Ant resting");
        format!("Ant is resting. Health after resting: {}", self.health)
    }

    /// Advance the ant's own state machine by one step.
    ///
    /// A resting ant wakes up and regains `wake_recovery` health; an active
    /// ant counts one more active tick.
    pub fn tick(&mut self, vitals: &VitalsConfig) -> String {
        if self.resting {
            self.resting = false;
            self.health = self.health.saturating_add(vitals.wake_recovery);
            debug!(ant_id = %self.id, health = self.health, "Ant woke up");
            format!("Ant finished resting. Health: {}", self.health)
        } else {
            self.active_ticks = self.active_ticks.saturating_add(1);
            debug!(ant_id = %self.id, active_ticks = self.active_ticks, "Ant active");
            format!("Ant is active. Active ticks: {}", self.active_ticks)
        }
    }

    /// Describe what the ant is doing this turn. Does not change state.
    pub fn act(&self) -> String {
        match self.species {
            Species::Drone => format!("Drone is looking for food. Health: {}", self.health),
            Species::Warrior => format!("Warrior is hunting. Health: {}", self.health),
            Species::Queen => format!("Queen is spawning an egg. Health: {}", self.health),
            Species::Killer | Species::Pansy => {
                format!("{} is idle. Health: {}", self.species, self.health)
            }
        }
    }

    /// Fight another ant. Both sides take damage in the same exchange.
    ///
    /// Returns `true` if the opponent's health dropped to zero or below.
    /// Returns `false` without touching either ant if either is already dead.
    pub fn battle(&mut self, opponent: &mut Self) -> bool {
        combat::resolve_battle(self, opponent).is_some_and(|outcome| outcome.opponent_fell)
    }

    /// [`Ant::battle`] against an opponent that may be absent.
    pub fn battle_with(&mut self, opponent: Option<&mut Self>) -> bool {
        opponent.is_some_and(|other| self.battle(other))
    }

    pub(crate) const fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }
}

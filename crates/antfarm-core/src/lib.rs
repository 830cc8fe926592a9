//! Rooms, colonies, and the tick engine for the Ant Farm simulation.
//!
//! Each farm tick runs, for every room in creation order, a resting pass
//! followed by an interaction pass:
//!
//! 1. **Rest** -- living ants are put to rest up to the room's resting
//!    capacity, then dead ants are pruned.
//! 2. **Interact** -- every living ant acts, resting or not.
//!
//! With `farm.agent_step` enabled, each pass first advances every living
//! ant's own state machine (waking resting ants, counting active ticks).
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `antfarm-config.yaml`
//! - [`error`] -- Farm-level errors ([`FarmError`])
//! - [`farm`] -- [`AntFarm`]: rooms, colony IDs, global ticking
//! - [`meadow`] -- [`Meadow`]: session context that builds farms
//! - [`room`] -- [`Room`]: owned ants, resting capacity, per-room passes

pub mod config;
pub mod error;
pub mod farm;
pub mod meadow;
pub mod room;

pub use config::SimulationConfig;
pub use error::FarmError;
pub use farm::{AntFarm, COLONY_NOT_FOUND, TickReport};
pub use meadow::Meadow;
pub use room::{RestReport, Room};

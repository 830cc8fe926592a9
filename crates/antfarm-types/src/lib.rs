//! Shared type definitions for the Ant Farm simulation.
//!
//! This crate is the single source of truth for the identifiers and
//! enumerations used across the workspace.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifiers for ants, rooms, and colonies
//! - [`species`] -- The closed [`Species`] enumeration and its token parser
//! - [`stats`] -- Combat stat blocks ([`AntStats`])

pub mod ids;
pub mod species;
pub mod stats;

// Re-export all public types at crate root for convenience.
pub use ids::{AntId, ColonyId, RoomId};
pub use species::{ParseSpeciesError, Species};
pub use stats::AntStats;

//! Ant state, lifecycle, and combat for the Ant Farm simulation.
//!
//! This crate holds everything that operates on a single ant without
//! knowing about rooms or colonies. Rooms and the farm live in
//! `antfarm-core`.
//!
//! # Modules
//!
//! - [`ant`] -- The [`Ant`] agent and its Active / Resting / Dead lifecycle
//! - [`combat`] -- Two-sided battle resolution ([`BattleOutcome`])
//! - [`config`] -- Tunable vitals ([`VitalsConfig`]) and species stat
//!   presets ([`SpeciesPresets`])
//! - [`error`] -- Error types for agent operations ([`AgentError`])

pub mod ant;
pub mod combat;
pub mod config;
pub mod error;

// Re-export primary types at crate root for convenience.
pub use ant::Ant;
pub use combat::{BattleOutcome, resolve_battle};
pub use config::{SpeciesPresets, VitalsConfig};
pub use error::AgentError;

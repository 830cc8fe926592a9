//! Console front-end for the Ant Farm simulation.
//!
//! Reads one command per line, turns it into calls on an
//! [`AntFarm`](antfarm_core::AntFarm), and writes the replies. The
//! simulation itself lives in `antfarm-core`; nothing here changes farm
//! state except through its public operations.
//!
//! # Modules
//!
//! - [`command`] -- Line parser producing typed [`Command`]s
//! - [`error`] -- Command errors ([`CommandError`])
//! - [`logging`] -- `tracing` subscriber setup
//! - [`session`] -- [`Session`]: command dispatch and the read loop

pub mod command;
pub mod error;
pub mod logging;
pub mod session;

pub use command::Command;
pub use error::CommandError;
pub use session::{Reply, Session};

//! Error types for command parsing.
//!
//! These surface to the user as
//! `Error while processing command: <message>` on the error stream. None of
//! them end the session.

use std::num::ParseIntError;

use antfarm_core::FarmError;

/// A command line could not be parsed or carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A required argument was not supplied.
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// The name of the missing argument.
        argument: &'static str,
    },

    /// An argument that must be an integer was not one.
    #[error("{command}: invalid integer for <{argument}>: {token:?} ({source})")]
    InvalidInteger {
        /// The command keyword.
        command: &'static str,
        /// The name of the offending argument.
        argument: &'static str,
        /// The token as typed.
        token: String,
        /// The underlying parse error.
        source: ParseIntError,
    },

    /// The farm refused the operation for a reason other than species.
    #[error(transparent)]
    Farm(#[from] FarmError),
}

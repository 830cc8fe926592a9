//! Line parser for the console protocol.
//!
//! Tokens are whitespace-delimited and case-sensitive. Extra trailing
//! tokens are ignored.
//!
//! | line                         | command |
//! |------------------------------|---------|
//! | `spawn <x> <y> <species>`    | [`Command::Spawn`] |
//! | `give <id> <resource> <amt>` | [`Command::Give`] |
//! | `tick [<n>]`                 | [`Command::Tick`] |
//! | `summary <id>`               | [`Command::Summary`] |
//! | `exit`                       | [`Command::Exit`] |

use std::str::{FromStr, SplitWhitespace};

use crate::error::CommandError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a colony. The species token is resolved at dispatch, so an
    /// unknown or unsupported species is a reply, not a parse error.
    Spawn {
        /// Accepted but unused column.
        x: i32,
        /// Accepted but unused row.
        y: i32,
        /// Raw species token; empty when omitted.
        species: String,
    },
    /// Resource hand-out. Has no effect on the farm.
    Give {
        /// Target colony, as typed.
        colony: i64,
        /// Resource name.
        resource: String,
        /// Quantity.
        amount: i64,
    },
    /// Advance the farm.
    Tick {
        /// Cycle count as typed; 1 when omitted or not an integer. Counts
        /// below 1 run no cycles.
        cycles: i64,
    },
    /// Print a colony report.
    Summary {
        /// Colony ID, as typed. Values that cannot be an ID are not found.
        colony: i64,
    },
    /// End the session.
    Exit,
    /// Any other keyword.
    Unknown {
        /// The unrecognised keyword.
        keyword: String,
    },
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns [`CommandError`] when a required integer argument is missing
/// or malformed.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line == "exit" {
        return Ok(Some(Command::Exit));
    }

    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "spawn" => Command::Spawn {
            x: integer(&mut tokens, "spawn", "x")?,
            y: integer(&mut tokens, "spawn", "y")?,
            species: tokens.next().unwrap_or_default().to_owned(),
        },
        "give" => Command::Give {
            colony: integer(&mut tokens, "give", "id")?,
            resource: word(&mut tokens, "give", "resource")?,
            amount: integer(&mut tokens, "give", "amount")?,
        },
        "tick" => Command::Tick {
            cycles: tokens
                .next()
                .and_then(|token| token.parse().ok())
                .unwrap_or(1),
        },
        "summary" => Command::Summary {
            colony: integer(&mut tokens, "summary", "id")?,
        },
        other => Command::Unknown {
            keyword: other.to_owned(),
        },
    };
    Ok(Some(command))
}

fn word(
    tokens: &mut SplitWhitespace<'_>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    tokens
        .next()
        .map(str::to_owned)
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn integer<T>(
    tokens: &mut SplitWhitespace<'_>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let token = tokens
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })?;
    token
        .parse()
        .map_err(|source| CommandError::InvalidInteger {
            command,
            argument,
            token: token.to_owned(),
            source,
        })
}

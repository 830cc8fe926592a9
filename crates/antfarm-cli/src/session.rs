//! Command dispatch and the read loop.
//!
//! A [`Session`] owns one farm for its whole life. Every command runs to
//! completion before the next line is read. Nothing a user types is fatal:
//! parse failures go to the error stream and the loop carries on until
//! `exit` or end of input.

use std::io::{self, BufRead, Write};

use antfarm_core::{AntFarm, COLONY_NOT_FOUND, FarmError, Meadow};
use antfarm_types::{ColonyId, Species};
use tracing::{debug, info};

use crate::command::{self, Command};
use crate::error::CommandError;

/// Printed once when an interactive session starts.
pub const BANNER: &str = "Welcome to the Ant Farm Simulator!\n\
Available commands:\n  spawn X Y T\n  give I R A\n  tick [T]\n  summary I\n\
Type 'exit' to quit.";

/// Printed before each line is read in an interactive session.
pub const PROMPT: &str = "> ";

/// Reply for a spawn whose species cannot be created.
pub const UNKNOWN_SPECIES: &str = "Unknown species.";

/// Reply for an unrecognised keyword.
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

/// What a single command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines for standard output, each written with a trailing newline.
    Lines(Vec<String>),
    /// The user asked to leave.
    Exit,
}

/// One console session over one farm.
#[derive(Debug)]
pub struct Session {
    farm: AntFarm,
    echo_activity: bool,
    interactive: bool,
}

impl Session {
    /// Start a session with a fresh farm from `meadow`.
    pub fn new(meadow: &Meadow) -> Self {
        let cli = &meadow.config().cli;
        Self {
            farm: meadow.create_farm(),
            echo_activity: cli.echo_activity,
            interactive: cli.show_banner,
        }
    }

    /// The farm driven by this session.
    pub const fn farm(&self) -> &AntFarm {
        &self.farm
    }

    /// Parse and run one input line, dropping any tick activity.
    ///
    /// # Errors
    ///
    /// See [`Session::execute_with`].
    pub fn execute(&mut self, line: &str) -> Result<Reply, CommandError> {
        self.execute_with(line, &mut |_| {})
    }

    /// Parse and run one input line.
    ///
    /// While a `tick` runs, each activity line is passed to `on_activity`
    /// as it happens (only when activity echo is enabled). The returned
    /// reply holds the lines that follow.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for missing or malformed integer arguments,
    /// in which case the farm is left untouched, or when the farm itself
    /// refuses the operation.
    pub fn execute_with(
        &mut self,
        line: &str,
        on_activity: &mut dyn FnMut(&str),
    ) -> Result<Reply, CommandError> {
        let Some(command) = command::parse(line)? else {
            return Ok(Reply::Lines(Vec::new()));
        };
        debug!(?command, "Dispatching command");
        self.dispatch(command, on_activity)
    }

    fn dispatch(
        &mut self,
        command: Command,
        on_activity: &mut dyn FnMut(&str),
    ) -> Result<Reply, CommandError> {
        let lines = match command {
            Command::Spawn { x, y, species } => vec![self.spawn(&species, x, y)?],
            Command::Give {
                colony,
                resource,
                amount,
            } => vec![format!("Gave {amount} of {resource} to colony {colony}")],
            Command::Tick { cycles } => {
                // Counts below 1 run nothing but are still echoed as typed.
                let runs = u64::try_from(cycles).unwrap_or(0);
                if self.echo_activity {
                    self.farm.tick_with(runs, &mut *on_activity);
                } else {
                    self.farm.tick(runs);
                }
                vec![format!("Tick executed for {cycles} cycles.")]
            }
            Command::Summary { colony } => vec![
                ColonyId::try_from(colony)
                    .map_or_else(|_| COLONY_NOT_FOUND.to_owned(), |id| self.farm.summary(id)),
            ],
            Command::Exit => return Ok(Reply::Exit),
            Command::Unknown { keyword } => {
                debug!(%keyword, "Unknown command");
                vec![UNKNOWN_COMMAND.to_owned()]
            }
        };
        Ok(Reply::Lines(lines))
    }

    fn spawn(&mut self, token: &str, x: i32, y: i32) -> Result<String, CommandError> {
        let Ok(species) = token.parse::<Species>() else {
            debug!(token, "Species token not recognised");
            return Ok(UNKNOWN_SPECIES.to_owned());
        };
        match self.farm.spawn_colony(species, x, y) {
            Ok(id) => Ok(format!("Colony created with ID: {id}")),
            Err(FarmError::UnsupportedSpecies { .. }) => Ok(UNKNOWN_SPECIES.to_owned()),
            Err(err) => Err(err.into()),
        }
    }

    /// Run the read loop until `exit` or end of input.
    ///
    /// Replies and tick activity go to `out`; command errors go to `err` as
    /// `Error while processing command: <message>`. Bytes that are not
    /// valid UTF-8 are replaced, never fatal.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing the streams.
    pub fn run<R, W, E>(&mut self, mut input: R, mut out: W, mut err: E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.interactive {
            writeln!(out, "{BANNER}")?;
        }

        let mut buf = Vec::new();
        loop {
            if self.interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input, closing session");
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);

            let mut write_error = None;
            let result = self.execute_with(line, &mut |activity| {
                if write_error.is_none() {
                    write_error = writeln!(out, "{activity}").err();
                }
            });
            if let Some(e) = write_error {
                return Err(e);
            }

            match result {
                Ok(Reply::Exit) => {
                    info!("Exit requested, closing session");
                    break;
                }
                Ok(Reply::Lines(replies)) => {
                    for reply in replies {
                        writeln!(out, "{reply}")?;
                    }
                }
                Err(e) => {
                    writeln!(err, "Error while processing command: {e}")?;
                }
            }
        }
        out.flush()?;
        err.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use antfarm_core::SimulationConfig;

    use super::*;

    fn session() -> Session {
        Session::new(&Meadow::default())
    }

    fn lines(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Lines(lines) => lines,
            Reply::Exit => Vec::new(),
        }
    }

    #[test]
    fn spawn_reports_new_id() {
        let mut s = session();
        assert_eq!(
            lines(s.execute("spawn 1 1 Queen").unwrap()),
            vec!["Colony created with ID: 1"]
        );
        assert_eq!(
            lines(s.execute("spawn 2 2 Drone").unwrap()),
            vec!["Colony created with ID: 2"]
        );
    }

    #[test]
    fn unsupported_and_unknown_species_are_rejected_alike() {
        let mut s = session();
        for line in ["spawn 1 1 Killer", "spawn 1 1 Pansy", "spawn 1 1 Termite", "spawn 1 1"] {
            assert_eq!(lines(s.execute(line).unwrap()), vec!["Unknown species."]);
        }
        assert_eq!(s.farm().colony_count(), 0);
    }

    #[test]
    fn give_is_a_no_op_echo() {
        let mut s = session();
        assert_eq!(
            lines(s.execute("give 7 sugar 3").unwrap()),
            vec!["Gave 3 of sugar to colony 7"]
        );
        assert_eq!(s.farm().room_count(), 0);
    }

    #[test]
    fn tick_streams_activity_then_confirms() {
        let mut s = session();
        s.execute("spawn 0 0 Warrior").unwrap();
        let mut activity = Vec::new();
        let reply = s
            .execute_with("tick", &mut |line| activity.push(line.to_owned()))
            .unwrap();
        assert_eq!(
            activity,
            vec![
                "Ant is resting. Health after resting: 115",
                "Warrior is hunting. Health: 115",
            ]
        );
        assert_eq!(lines(reply), vec!["Tick executed for 1 cycles."]);
    }

    #[test]
    fn negative_tick_runs_nothing_and_echoes_the_count() {
        let mut s = session();
        s.execute("spawn 0 0 Warrior").unwrap();
        let mut activity = 0_usize;
        let reply = s
            .execute_with("tick -3", &mut |_| activity = activity.saturating_add(1))
            .unwrap();
        assert_eq!(lines(reply), vec!["Tick executed for -3 cycles."]);
        assert_eq!(activity, 0);
        let ant = s.farm().room(ColonyId(1)).unwrap().ants().first().unwrap();
        assert_eq!(ant.health(), 120);
    }

    #[test]
    fn tick_without_echo_only_confirms() {
        let mut config = SimulationConfig::default();
        config.cli.echo_activity = false;
        let mut s = Session::new(&Meadow::new(config));
        s.execute("spawn 0 0 Warrior").unwrap();
        let mut activity = 0_usize;
        let reply = s
            .execute_with("tick 4", &mut |_| activity = activity.saturating_add(1))
            .unwrap();
        assert_eq!(lines(reply), vec!["Tick executed for 4 cycles."]);
        assert_eq!(activity, 0);
    }

    #[test]
    fn summary_of_negative_id_is_not_found() {
        let mut s = session();
        assert_eq!(lines(s.execute("summary -1").unwrap()), vec!["Colony not found."]);
    }

    #[test]
    fn unknown_keyword() {
        let mut s = session();
        assert_eq!(lines(s.execute("dance").unwrap()), vec!["Unknown command."]);
    }

    #[test]
    fn malformed_numbers_do_not_touch_the_farm() {
        let mut s = session();
        assert!(s.execute("spawn a b Drone").is_err());
        assert_eq!(s.farm().colony_count(), 0);
    }

    #[test]
    fn exit_reply() {
        assert_eq!(session().execute("exit").unwrap(), Reply::Exit);
    }
}

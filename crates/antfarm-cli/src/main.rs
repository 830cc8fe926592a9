//! `antfarm` binary: the console front-end for the Ant Farm simulation.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration from `antfarm-config.yaml` (or `--config`)
//! 3. Initialize structured logging (tracing, to stderr)
//! 4. Build the [`Meadow`] session context
//! 5. Run the command loop on stdin/stdout until `exit` or end of input

use std::io;
use std::path::{Path, PathBuf};

use antfarm_cli::{Session, logging};
use antfarm_core::{Meadow, SimulationConfig};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Turn-based ant colony simulator.
#[derive(Parser, Debug)]
#[command(name = "antfarm", version, about)]
struct Args {
    /// Path to the YAML configuration file. Defaults are used if it does not exist.
    #[arg(long, short, default_value = "antfarm-config.yaml")]
    config: PathBuf,

    /// Suppress the banner, the prompt, and per-ant activity lines.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, loaded_from_file) = load_config(&args.config)?;
    if args.quiet {
        config.cli.show_banner = false;
        config.cli.echo_activity = false;
    }

    logging::init(&config.logging);
    if loaded_from_file {
        info!(path = %args.config.display(), "Configuration loaded");
    } else {
        info!(path = %args.config.display(), "Config file not found, using defaults");
    }
    info!(
        room_capacity = config.farm.room_capacity,
        agent_step = config.farm.agent_step,
        "antfarm starting"
    );

    let meadow = Meadow::new(config);
    let mut session = Session::new(&meadow);
    session
        .run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
        .context("console I/O failed")?;

    info!(
        colonies = session.farm().colony_count(),
        population = session.farm().population(),
        "antfarm shutdown complete"
    );
    Ok(())
}

/// Load the simulation configuration, falling back to defaults when the
/// file does not exist. The flag reports whether a file was read.
fn load_config(path: &Path) -> anyhow::Result<(SimulationConfig, bool)> {
    if path.exists() {
        let config = SimulationConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        Ok((config, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

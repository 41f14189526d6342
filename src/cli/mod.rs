//! cli
//!
//! Command-line interface layer for trailwalk.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Trails are loaded from documents, handed to the
//! [`crate::core`] algorithms, and the results are rendered by [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Settings shared by every command handler.
#[derive(Debug)]
pub struct Context {
    /// Loaded configuration (defaults if no file was found)
    pub config: Config,
    /// Output verbosity from `--quiet` / `--debug`
    pub verbosity: Verbosity,
    /// Emit JSON instead of text
    pub json: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    init_logging(verbosity, cli.debug);

    let loaded = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    let ctx = Context {
        config: loaded.config,
        verbosity,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `--debug` forces debug output; otherwise `RUST_LOG` wins over the
/// verbosity default.
fn init_logging(verbosity: Verbosity, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
    };

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

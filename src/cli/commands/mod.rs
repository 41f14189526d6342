//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the trail document named on the command line
//! 2. Resolves options (CLI flag, then config, then default)
//! 3. Runs the core algorithm and formats the result
//!
//! With `--json`, handlers print a single JSON value on stdout.

mod completion;
mod config_cmd;
mod mountains;
mod paths;
mod show;
mod walk;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list};
pub use mountains::mountains;
pub use paths::paths;
pub use show::show;
pub use walk::walk;

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::document::TrailDocument;
use crate::core::trail::Trail;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Walk {
            file,
            personality,
            workspace_capacity,
            max_steps,
        } => walk::walk(ctx, &file, personality, workspace_capacity, max_steps),
        Command::Mountains { file } => mountains::mountains(ctx, &file),
        Command::Paths {
            file,
            length,
            policy,
        } => paths::paths(ctx, &file, length, policy),
        Command::Show { file } => show::show(ctx, &file),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load a trail document and build its trail.
pub(crate) fn load_trail(path: &Path) -> Result<Trail> {
    let doc = TrailDocument::load(path)
        .with_context(|| format!("Failed to load trail from '{}'", path.display()))?;
    debug!(path = %path.display(), segments = doc.trail.len(), "loaded trail document");
    Ok(doc.to_trail())
}

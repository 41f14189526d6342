//! paths command - List all paths with exactly K mountains

use std::path::Path;

use anyhow::Result;

use super::load_trail;
use crate::cli::Context;
use crate::core::enumerate::{length_k_paths_with, PathPolicy};
use crate::ui::output;
use crate::ui::trail_view::render_paths;

/// List length-`k` paths under the flag's policy, or the configured one.
pub fn paths(ctx: &Context, file: &Path, k: usize, policy: Option<PathPolicy>) -> Result<()> {
    let trail = load_trail(file)?;
    let policy = policy.unwrap_or_else(|| ctx.config.path_policy());

    let found = length_k_paths_with(&trail, k, policy);

    if ctx.json {
        output::print_json(&found)?;
    } else if found.is_empty() {
        output::print(
            format!("No {} paths with {} mountains.", policy, k),
            ctx.verbosity,
        );
    } else {
        output::print(render_paths(&found), ctx.verbosity);
    }
    Ok(())
}

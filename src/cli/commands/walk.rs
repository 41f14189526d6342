//! walk command - Follow one path through a trail

use std::path::Path;

use anyhow::{Context as _, Result};

use super::load_trail;
use crate::cli::Context;
use crate::core::personality::PersonalityKind;
use crate::core::traversal::{follow_path_with, WalkOptions};
use crate::ui::output;
use crate::ui::trail_view::render_walk;

/// Walk a trail with the chosen personality.
///
/// Flags override the `[walk]` section of the config.
pub fn walk(
    ctx: &Context,
    file: &Path,
    personality: Option<PersonalityKind>,
    workspace_capacity: Option<usize>,
    max_steps: Option<usize>,
) -> Result<()> {
    if workspace_capacity == Some(0) {
        anyhow::bail!("--workspace-capacity must be greater than 0");
    }
    if max_steps == Some(0) {
        anyhow::bail!("--max-steps must be greater than 0");
    }

    let trail = load_trail(file)?;

    let kind = personality.unwrap_or_else(|| ctx.config.personality());
    let defaults = ctx.config.walk_options();
    let options = WalkOptions {
        workspace_capacity: workspace_capacity.or(defaults.workspace_capacity),
        max_steps: max_steps.or(defaults.max_steps),
    };

    let mut walker = kind.build();
    let report = follow_path_with(&trail, &mut walker, &options)
        .with_context(|| format!("Walk with the {} personality failed", kind))?;

    if ctx.json {
        output::print_json(&report)?;
    } else {
        output::print(render_walk(&report), ctx.verbosity);
    }
    Ok(())
}

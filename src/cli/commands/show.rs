//! show command - Display a trail as a tree

use std::path::Path;

use anyhow::Result;

use super::load_trail;
use crate::cli::Context;
use crate::core::document::TrailDocument;
use crate::ui::output;
use crate::ui::trail_view::render_trail;

/// Print the trail as a tree, or as a normalized document with `--json`.
pub fn show(ctx: &Context, file: &Path) -> Result<()> {
    let trail = load_trail(file)?;

    if ctx.json {
        output::print_json(&TrailDocument::from_trail(&trail))?;
    } else if trail.is_empty() {
        output::print("(empty trail)", ctx.verbosity);
    } else {
        output::print(render_trail(&trail), ctx.verbosity);
    }
    Ok(())
}

//! mountains command - List every mountain on every path

use std::path::Path;

use anyhow::Result;

use super::load_trail;
use crate::cli::Context;
use crate::core::enumerate::collect_all_mountains;
use crate::ui::output;

pub fn mountains(ctx: &Context, file: &Path) -> Result<()> {
    let trail = load_trail(file)?;
    let mountains = collect_all_mountains(&trail);

    if ctx.json {
        output::print_json(&mountains)?;
    } else if mountains.is_empty() {
        output::print("(no mountains)", ctx.verbosity);
    } else {
        output::print(output::format_list(&mountains, ""), ctx.verbosity);
    }
    Ok(())
}

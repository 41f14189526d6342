//! config command - Get or list effective configuration values

use anyhow::{bail, Result};
use serde_json::json;

use crate::cli::Context;
use crate::core::config::Config;

/// Known keys, in display order.
const KEYS: &[&str] = &[
    "walk.personality",
    "walk.workspace_capacity",
    "walk.max_steps",
    "paths.policy",
];

/// Effective value of a key, or `None` for an unset limit.
fn value_of(config: &Config, key: &str) -> Result<Option<String>> {
    let options = config.walk_options();
    let value = match key {
        "walk.personality" => Some(config.personality().to_string()),
        "walk.workspace_capacity" => options.workspace_capacity.map(|n| n.to_string()),
        "walk.max_steps" => options.max_steps.map(|n| n.to_string()),
        "paths.policy" => Some(config.path_policy().to_string()),
        _ => bail!(
            "Unknown configuration key: {} (known keys: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = value_of(&ctx.config, key)?;

    if ctx.json {
        crate::ui::output::print_json(&json!({ "key": key, "value": value }))?;
    } else if let Some(value) = value {
        println!("{}", value);
    }
    // Unset limits print nothing
    Ok(())
}

/// List all effective configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let source = ctx
        .config
        .loaded_from()
        .map(|p| p.display().to_string());

    if ctx.json {
        let mut values = serde_json::Map::new();
        for key in KEYS {
            values.insert(key.to_string(), json!(value_of(&ctx.config, key)?));
        }
        crate::ui::output::print_json(&json!({ "source": source, "values": values }))?;
        return Ok(());
    }

    println!(
        "# source: {}",
        source.as_deref().unwrap_or("(defaults, no config file)")
    );
    for key in KEYS {
        let value = value_of(&ctx.config, key)?;
        println!("{} = {}", key, value.as_deref().unwrap_or("(unset)"));
    }
    Ok(())
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load this config file instead of the default locations
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::enumerate::PathPolicy;
use crate::core::personality::PersonalityKind;

/// Trail - walk and enumerate branching trails
#[derive(Parser, Debug)]
#[command(name = "trail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Follow one path through a trail
    #[command(
        name = "walk",
        long_about = "Follow one path through a trail.\n\n\
            At every split the personality picks the top or the bottom branch; \
            both branches rejoin at the split's follow path. Mountains are \
            printed in the order they are visited.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Walk with the configured personality (default: top)
    trail walk trail.json

    # Take the easier-looking branch at every split
    trail walk trail.json --personality lazy

    # Fail instead of walking trails nested more than 8 splits deep
    trail walk trail.json --workspace-capacity 8"
    )]
    Walk {
        /// Trail document (JSON)
        file: PathBuf,

        /// Personality to walk with: top, bottom or lazy
        #[arg(short, long)]
        personality: Option<PersonalityKind>,

        /// Maximum number of pending follow paths
        #[arg(long, value_name = "N")]
        workspace_capacity: Option<usize>,

        /// Maximum number of trail nodes to process
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },

    /// List every mountain on every path
    #[command(
        name = "mountains",
        long_about = "List every mountain on every path.\n\n\
            Both branches of every split are explored, top first. A follow path \
            is listed once for each branch that reaches it."
    )]
    Mountains {
        /// Trail document (JSON)
        file: PathBuf,
    },

    /// List all paths with exactly K mountains
    #[command(
        name = "paths",
        long_about = "List all paths with exactly K mountains.\n\n\
            A path is a sequence of branch choices. Paths that take different \
            branches are listed separately even if they visit the same mountains.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Complete paths with exactly 3 mountains
    trail paths trail.json -k 3

    # Every route's first 3 mountains
    trail paths trail.json -k 3 --policy truncating"
    )]
    Paths {
        /// Trail document (JSON)
        file: PathBuf,

        /// Number of mountains on each path
        #[arg(short = 'k', long = "length", value_name = "K")]
        length: usize,

        /// terminating (paths must end with K mountains) or truncating
        #[arg(long)]
        policy: Option<PathPolicy>,
    },

    /// Display a trail as a tree
    #[command(name = "show")]
    Show {
        /// Trail document (JSON)
        file: PathBuf,
    },

    /// Inspect configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for trail commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    trail completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    trail completion zsh >> ~/.zshrc

    # Fish
    trail completion fish > ~/.config/fish/completions/trail.fish

    # PowerShell
    trail completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// List effective configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! The first existing file wins:
//! 1. An explicit path (`--config`), which must exist
//! 2. `$TRAILWALK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/trailwalk/config.toml`
//! 4. `~/.trailwalk/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use trailwalk::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Personality: {}", config.personality());
//! println!("Path policy: {}", config.path_policy());
//! ```

pub mod schema;

pub use schema::{PathsDefaults, TrailConfig, WalkDefaults};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::enumerate::PathPolicy;
use crate::core::personality::PersonalityKind;
use crate::core::traversal::WalkOptions;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TRAILWALK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: TrailConfig,
    /// Path the file was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if a config file
    /// exists but cannot be parsed or fails validation. Missing default
    /// files are not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        Self::load_with(explicit, |key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Load with the environment and home directory supplied by the caller.
    pub fn load_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::locate(&env, home, &mut warnings),
        };

        let Some(path) = path else {
            return Ok(ConfigLoadResult {
                config: Config::default(),
                warnings,
            });
        };

        let file = Self::read_config(&path)?;
        file.validate()?;

        if let Some(capacity) = file.walk.as_ref().and_then(|w| w.workspace_capacity) {
            if capacity < schema::RECOMMENDED_MIN_WORKSPACE {
                warnings.push(ConfigWarning {
                    message: format!(
                        "walk.workspace_capacity = {} is below the recommended {}; deeply nested trails may fail to walk",
                        capacity,
                        schema::RECOMMENDED_MIN_WORKSPACE
                    ),
                    path: path.clone(),
                });
            }
        }

        Ok(ConfigLoadResult {
            config: Config {
                file,
                path: Some(path),
            },
            warnings,
        })
    }

    /// Find the first existing config file in the default locations.
    fn locate(
        env: &impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Option<PathBuf> {
        // 1. Check $TRAILWALK_CONFIG
        if let Some(path) = env(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("${} points at a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/trailwalk/config.toml
        if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("trailwalk/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.trailwalk/config.toml
        if let Some(home) = home {
            let path = home.join(".trailwalk/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<TrailConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the default personality.
    ///
    /// Defaults to `top` if not configured.
    pub fn personality(&self) -> PersonalityKind {
        self.file
            .walk
            .as_ref()
            .and_then(|w| w.personality)
            .unwrap_or_default()
    }

    /// Get the walk limits.
    ///
    /// Defaults to a growable workspace and no step limit.
    pub fn walk_options(&self) -> WalkOptions {
        let walk = self.file.walk.as_ref();
        WalkOptions {
            workspace_capacity: walk.and_then(|w| w.workspace_capacity),
            max_steps: walk.and_then(|w| w.max_steps),
        }
    }

    /// Get the path enumeration policy.
    ///
    /// Defaults to `terminating` if not configured.
    pub fn path_policy(&self) -> PathPolicy {
        self.file
            .paths
            .as_ref()
            .and_then(|p| p.policy)
            .unwrap_or_default()
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

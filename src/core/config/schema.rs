//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: limits must be positive.
//! Names (personality, path policy) are validated by serde itself.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::enumerate::PathPolicy;
use crate::core::personality::PersonalityKind;

/// Workspace capacities below this draw a warning.
pub const RECOMMENDED_MIN_WORKSPACE: usize = 200;

/// Top-level configuration file.
///
/// # Example
///
/// ```toml
/// [walk]
/// personality = "lazy"
/// workspace_capacity = 200
/// max_steps = 100000
///
/// [paths]
/// policy = "terminating"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Walk defaults
    pub walk: Option<WalkDefaults>,

    /// Path enumeration defaults
    pub paths: Option<PathsDefaults>,
}

impl TrailConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(walk) = &self.walk {
            walk.validate()?;
        }
        Ok(())
    }
}

/// Walk command defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WalkDefaults {
    /// Personality used when none is given on the command line
    pub personality: Option<PersonalityKind>,

    /// Bound on pending follow paths (unset = growable)
    pub workspace_capacity: Option<usize>,

    /// Bound on trail nodes processed per walk
    pub max_steps: Option<usize>,
}

impl WalkDefaults {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workspace_capacity == Some(0) {
            return Err(ConfigError::InvalidValue(
                "walk.workspace_capacity must be greater than 0".to_string(),
            ));
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::InvalidValue(
                "walk.max_steps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Path enumeration defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsDefaults {
    /// Which length-k paths are reported
    pub policy: Option<PathPolicy>,
}

//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`MountainName`] - Validated mountain name
//! - [`Mountain`] - An activity on the trail
//! - [`Branch`] - Which side of a split a walker takes
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so the engines never check names again.
//!
//! # Examples
//!
//! ```
//! use trailwalk::core::types::{Mountain, MountainName};
//!
//! let everest = Mountain::new("everest", 8, 11).unwrap();
//! assert_eq!(everest.name().as_str(), "everest");
//!
//! assert!(MountainName::new("").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid mountain name: {0}")]
    InvalidMountainName(String),
}

/// A validated mountain name.
///
/// Names must be:
/// - non-empty and not only whitespace
/// - at most [`MountainName::MAX_LEN`] characters
/// - free of control characters
///
/// # Example
///
/// ```
/// use trailwalk::core::types::MountainName;
///
/// let name = MountainName::new("Mount Doom").unwrap();
/// assert_eq!(name.as_str(), "Mount Doom");
///
/// assert!(MountainName::new("   ").is_err());
/// assert!(MountainName::new("tab\there").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MountainName(String);

impl MountainName {
    /// Longest accepted name, in characters.
    pub const MAX_LEN: usize = 64;

    /// Create a new validated mountain name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidMountainName` if the name is empty, too
    /// long, or contains control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.trim().is_empty() {
            return Err(TypeError::InvalidMountainName(
                "mountain name cannot be empty".into(),
            ));
        }

        let len = name.chars().count();
        if len > Self::MAX_LEN {
            return Err(TypeError::InvalidMountainName(format!(
                "mountain name is {len} characters, limit is {}",
                Self::MAX_LEN
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(TypeError::InvalidMountainName(
                "mountain name cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MountainName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MountainName> for String {
    fn from(name: MountainName) -> Self {
        name.0
    }
}

impl fmt::Display for MountainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A mountain on the trail.
///
/// The engines treat mountains as opaque values: they are cloned into
/// reports and handed to personalities but never inspected. Only
/// personalities read `difficulty_level` and `length`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mountain {
    name: MountainName,
    difficulty_level: u32,
    length: u32,
}

impl Mountain {
    /// Create a mountain, validating its name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidMountainName` if `name` is invalid.
    pub fn new(
        name: impl Into<String>,
        difficulty_level: u32,
        length: u32,
    ) -> Result<Self, TypeError> {
        Ok(Self {
            name: MountainName::new(name)?,
            difficulty_level,
            length,
        })
    }

    pub fn name(&self) -> &MountainName {
        &self.name
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    pub fn length(&self) -> u32 {
        self.length
    }
}

impl fmt::Display for Mountain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (difficulty {}, length {})",
            self.name, self.difficulty_level, self.length
        )
    }
}

/// One side of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Top,
    Bottom,
}

impl Branch {
    /// `true` selects the top branch, `false` the bottom one.
    pub fn from_top(top: bool) -> Self {
        if top {
            Branch::Top
        } else {
            Branch::Bottom
        }
    }

    pub fn is_top(self) -> bool {
        self == Branch::Top
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Top => f.write_str("top"),
            Branch::Bottom => f.write_str("bottom"),
        }
    }
}

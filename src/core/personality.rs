//! core::personality
//!
//! Strategies that steer a walker along a trail.
//!
//! # Design
//!
//! The traversal engine only ever calls the two methods of [`Personality`]:
//! it reports each visited mountain and asks for a branch at each split.
//! It never inspects the personality's own state.
//!
//! Built-in personalities:
//! - [`TopWalker`] always takes the top branch
//! - [`BottomWalker`] always takes the bottom branch
//! - [`LazyWalker`] takes the branch whose first mountain is easier
//!
//! [`PersonalityKind`] names the built-ins for configuration and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::trail::{Trail, TrailStore};
use super::types::{Branch, Mountain};

/// A walker's decision-making strategy.
pub trait Personality {
    /// Called once per visited mountain, in visit order.
    fn add_mountain(&mut self, mountain: &Mountain);

    /// Called once per split encountered; picks the branch to walk.
    fn select_branch(&mut self, top: &Trail, bottom: &Trail) -> Branch;
}

impl<P: Personality + ?Sized> Personality for Box<P> {
    fn add_mountain(&mut self, mountain: &Mountain) {
        (**self).add_mountain(mountain);
    }

    fn select_branch(&mut self, top: &Trail, bottom: &Trail) -> Branch {
        (**self).select_branch(top, bottom)
    }
}

/// Always takes the top branch.
#[derive(Debug, Clone, Default)]
pub struct TopWalker {
    mountains: Vec<Mountain>,
}

impl TopWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mountains visited so far.
    pub fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}

impl Personality for TopWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch(&mut self, _top: &Trail, _bottom: &Trail) -> Branch {
        Branch::Top
    }
}

/// Always takes the bottom branch.
#[derive(Debug, Clone, Default)]
pub struct BottomWalker {
    mountains: Vec<Mountain>,
}

impl BottomWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mountains visited so far.
    pub fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}

impl Personality for BottomWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch(&mut self, _top: &Trail, _bottom: &Trail) -> Branch {
        Branch::Bottom
    }
}

/// Takes the branch whose first mountain has the lower difficulty.
///
/// Ties go to the top branch, as does any split where either branch does
/// not start with a mountain.
#[derive(Debug, Clone, Default)]
pub struct LazyWalker {
    mountains: Vec<Mountain>,
}

impl LazyWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mountains visited so far.
    pub fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }
}

fn first_mountain(trail: &Trail) -> Option<&Mountain> {
    match trail.store() {
        TrailStore::Series(series) => Some(&series.mountain),
        TrailStore::Empty | TrailStore::Split(_) => None,
    }
}

impl Personality for LazyWalker {
    fn add_mountain(&mut self, mountain: &Mountain) {
        self.mountains.push(mountain.clone());
    }

    fn select_branch(&mut self, top: &Trail, bottom: &Trail) -> Branch {
        match (first_mountain(top), first_mountain(bottom)) {
            (Some(t), Some(b)) if b.difficulty_level() < t.difficulty_level() => Branch::Bottom,
            _ => Branch::Top,
        }
    }
}

/// The built-in personalities, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityKind {
    #[default]
    Top,
    Bottom,
    Lazy,
}

impl PersonalityKind {
    /// All built-in personalities.
    pub fn all() -> &'static [PersonalityKind] {
        &[
            PersonalityKind::Top,
            PersonalityKind::Bottom,
            PersonalityKind::Lazy,
        ]
    }

    /// The name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PersonalityKind::Top => "top",
            PersonalityKind::Bottom => "bottom",
            PersonalityKind::Lazy => "lazy",
        }
    }

    /// Parse a personality name, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use trailwalk::core::personality::PersonalityKind;
    ///
    /// assert_eq!(PersonalityKind::parse("Lazy"), Some(PersonalityKind::Lazy));
    /// assert_eq!(PersonalityKind::parse("sprinter"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(PersonalityKind::Top),
            "bottom" => Some(PersonalityKind::Bottom),
            "lazy" => Some(PersonalityKind::Lazy),
            _ => None,
        }
    }

    /// Build a fresh personality of this kind.
    pub fn build(&self) -> Box<dyn Personality> {
        match self {
            PersonalityKind::Top => Box::new(TopWalker::new()),
            PersonalityKind::Bottom => Box::new(BottomWalker::new()),
            PersonalityKind::Lazy => Box::new(LazyWalker::new()),
        }
    }
}

impl fmt::Display for PersonalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PersonalityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let names: Vec<_> = Self::all().iter().map(|k| k.name()).collect();
            format!(
                "unknown personality '{}', must be one of: {}",
                s,
                names.join(", ")
            )
        })
    }
}

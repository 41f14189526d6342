//! core::traversal
//!
//! Walks one path through a trail under the direction of a [`Personality`].
//!
//! # Algorithm
//!
//! The walk is a loop over a cursor plus a [`Workspace`] of pending follow
//! paths; it never recurses, so split nesting depth is bounded only by the
//! workspace:
//!
//! - `Series`: report the mountain, move to the following trail
//! - `Split`: push the follow path, ask the personality for a branch and
//!   move into it
//! - `Empty`: resume the most recently pushed follow path, or stop if none
//!   is pending
//!
//! Nested splits therefore rejoin innermost first.
//!
//! # Failure
//!
//! A walk fails if a bounded workspace overflows or the step limit is hit.
//! The personality may already have seen some mountains by then, but no
//! [`WalkReport`] is produced for a failed walk.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, trace};

use super::personality::Personality;
use super::trail::{Trail, TrailStore};
use super::types::{Branch, Mountain};
use super::workspace::{Workspace, WorkspaceError};

/// Errors from walking a trail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("cannot hold pending follow path: {0}")]
    Workspace(#[from] WorkspaceError),

    #[error("walk exceeded the step limit of {limit}")]
    StepLimit { limit: usize },
}

/// Limits applied to a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum number of pending follow paths; `None` grows as needed.
    pub workspace_capacity: Option<usize>,
    /// Maximum number of trail nodes processed; `None` is unlimited.
    pub max_steps: Option<usize>,
}

/// What a completed walk visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    /// Mountains in visit order.
    pub mountains: Vec<Mountain>,
    /// Branch taken at each split, in the order the splits were reached.
    pub choices: Vec<Branch>,
    /// Deepest split nesting seen (peak workspace length).
    pub max_depth: usize,
}

/// Walk `trail` with a growable workspace and no step limit.
///
/// # Example
///
/// ```
/// use trailwalk::core::personality::TopWalker;
/// use trailwalk::core::trail::Trail;
/// use trailwalk::core::traversal::follow_path;
/// use trailwalk::core::types::Mountain;
///
/// let m = |name| Mountain::new(name, 1, 1).unwrap();
/// let trail = Trail::split(
///     Trail::series(m("a"), Trail::empty()),
///     Trail::series(m("b"), Trail::empty()),
///     Trail::series(m("c"), Trail::empty()),
/// );
///
/// let mut walker = TopWalker::new();
/// let report = follow_path(&trail, &mut walker).unwrap();
/// assert_eq!(report.mountains, vec![m("a"), m("c")]);
/// assert_eq!(walker.mountains(), &report.mountains[..]);
/// ```
pub fn follow_path<P>(trail: &Trail, personality: &mut P) -> Result<WalkReport, TraversalError>
where
    P: Personality + ?Sized,
{
    follow_path_with(trail, personality, &WalkOptions::default())
}

/// Walk `trail` under the given limits.
///
/// # Errors
///
/// - `TraversalError::Workspace` if a bounded workspace overflows
/// - `TraversalError::StepLimit` if more than `max_steps` nodes are processed
#[instrument(skip_all, level = "debug")]
pub fn follow_path_with<P>(
    trail: &Trail,
    personality: &mut P,
    options: &WalkOptions,
) -> Result<WalkReport, TraversalError>
where
    P: Personality + ?Sized,
{
    let mut workspace: Workspace<&Trail> = Workspace::with_capacity(options.workspace_capacity);
    let mut report = WalkReport::default();
    let mut cursor = trail;
    let mut steps = 0usize;

    loop {
        steps += 1;
        if let Some(limit) = options.max_steps {
            if steps > limit {
                return Err(TraversalError::StepLimit { limit });
            }
        }

        match cursor.store() {
            TrailStore::Series(series) => {
                personality.add_mountain(&series.mountain);
                report.mountains.push(series.mountain.clone());
                cursor = &series.following;
            }
            TrailStore::Split(split) => {
                workspace.push(&split.path_follow)?;
                report.max_depth = report.max_depth.max(workspace.len());

                let branch = personality.select_branch(&split.path_top, &split.path_bottom);
                trace!(%branch, depth = workspace.len(), "split");
                report.choices.push(branch);

                cursor = match branch {
                    Branch::Top => &split.path_top,
                    Branch::Bottom => &split.path_bottom,
                };
            }
            TrailStore::Empty => {
                if workspace.is_empty() {
                    break;
                }
                cursor = workspace.pop()?;
                trace!(depth = workspace.len(), "resuming follow path");
            }
        }
    }

    debug!(
        mountains = report.mountains.len(),
        splits = report.choices.len(),
        steps,
        "walk complete"
    );
    Ok(report)
}

impl Trail {
    /// Follow one path through this trail; see [`follow_path`].
    pub fn follow_path<P>(&self, personality: &mut P) -> Result<WalkReport, TraversalError>
    where
        P: Personality + ?Sized,
    {
        follow_path(self, personality)
    }
}

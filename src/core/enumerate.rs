//! core::enumerate
//!
//! Static analyses over a trail that explore both sides of every split.
//!
//! # Operations
//!
//! - [`collect_all_mountains`] lists the mountains of every path, top
//!   branch first. A follow path is listed once for each branch that
//!   reaches it, so `Split(a, b, c)` yields `[a, c, b, c]`.
//! - [`length_k_paths`] lists every path (sequence of branch choices) that
//!   holds exactly `k` mountains.
//!
//! Both run over an explicit frontier of partial walks instead of
//! recursing. The number of paths doubles with every split on a path, so
//! inputs are expected to stay small (at most five nested splits and fifty
//! mountains); this is not checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::trail::{Trail, TrailStore};
use super::types::{Branch, Mountain};

/// Which paths [`length_k_paths_with`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Only paths that reach the end of the trail with exactly `k` mountains.
    #[default]
    Terminating,
    /// Paths cut off at their `k`-th mountain, whatever trail remains.
    Truncating,
}

impl PathPolicy {
    pub fn all() -> &'static [PathPolicy] {
        &[PathPolicy::Terminating, PathPolicy::Truncating]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PathPolicy::Terminating => "terminating",
            PathPolicy::Truncating => "truncating",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminating" => Some(PathPolicy::Terminating),
            "truncating" => Some(PathPolicy::Truncating),
            _ => None,
        }
    }
}

impl fmt::Display for PathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let names: Vec<_> = Self::all().iter().map(|p| p.name()).collect();
            format!(
                "unknown path policy '{}', must be one of: {}",
                s,
                names.join(", ")
            )
        })
    }
}

/// One fully resolved path through a trail.
///
/// Paths are identified by their branch choices: two paths with the same
/// mountains but different choices are different paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TrailPath {
    /// Mountains in walk order.
    pub mountains: Vec<Mountain>,
    /// Branch taken at each split, in the order the splits were reached.
    pub choices: Vec<Branch>,
}

impl TrailPath {
    pub fn len(&self) -> usize {
        self.mountains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mountains.is_empty()
    }
}

/// A partial walk: where it stands, what it still has to resume, and what
/// it has collected so far.
#[derive(Clone)]
struct PartialPath<'a> {
    cursor: &'a Trail,
    pending: Vec<&'a Trail>,
    path: TrailPath,
}

/// Every mountain on every path, top branch first.
///
/// # Example
///
/// ```
/// use trailwalk::core::enumerate::collect_all_mountains;
/// use trailwalk::core::trail::Trail;
/// use trailwalk::core::types::Mountain;
///
/// let m = |name| Mountain::new(name, 1, 1).unwrap();
/// let trail = Trail::split(
///     Trail::series(m("a"), Trail::empty()),
///     Trail::series(m("b"), Trail::empty()),
///     Trail::series(m("c"), Trail::empty()),
/// );
///
/// assert_eq!(collect_all_mountains(&trail), vec![m("a"), m("c"), m("b"), m("c")]);
/// ```
pub fn collect_all_mountains(trail: &Trail) -> Vec<Mountain> {
    let mut mountains = Vec::new();
    let mut frames: Vec<(&Trail, Vec<&Trail>)> = vec![(trail, Vec::new())];

    while let Some((mut cursor, mut pending)) = frames.pop() {
        loop {
            match cursor.store() {
                TrailStore::Series(series) => {
                    mountains.push(series.mountain.clone());
                    cursor = &series.following;
                }
                TrailStore::Split(split) => {
                    pending.push(&split.path_follow);
                    frames.push((&split.path_bottom, pending.clone()));
                    cursor = &split.path_top;
                }
                TrailStore::Empty => match pending.pop() {
                    Some(next) => cursor = next,
                    None => break,
                },
            }
        }
    }

    mountains
}

/// All paths that reach the end of the trail with exactly `k` mountains.
///
/// Shorthand for [`length_k_paths_with`] under [`PathPolicy::Terminating`].
pub fn length_k_paths(trail: &Trail, k: usize) -> Vec<TrailPath> {
    length_k_paths_with(trail, k, PathPolicy::Terminating)
}

/// All paths holding exactly `k` mountains under `policy`.
///
/// Paths come out in depth-first order, top branch before bottom.
///
/// Under [`PathPolicy::Terminating`] a path is kept only if it reaches the
/// end of the trail with exactly `k` mountains; a walk is abandoned as soon
/// as it would take a `k+1`-th mountain. Under [`PathPolicy::Truncating`] a
/// path ends at its `k`-th mountain and records only the choices made up to
/// that point; walks that end with fewer than `k` mountains are dropped.
///
/// # Example
///
/// ```
/// use trailwalk::core::enumerate::length_k_paths;
/// use trailwalk::core::trail::Trail;
/// use trailwalk::core::types::{Branch, Mountain};
///
/// let m = |name| Mountain::new(name, 1, 1).unwrap();
/// // Two empty branches: same mountains, two distinct paths.
/// let trail = Trail::split(Trail::empty(), Trail::empty(), Trail::series(m("a"), Trail::empty()));
///
/// let paths = length_k_paths(&trail, 1);
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[0].choices, vec![Branch::Top]);
/// assert_eq!(paths[1].choices, vec![Branch::Bottom]);
/// ```
#[instrument(skip(trail), level = "debug")]
pub fn length_k_paths_with(trail: &Trail, k: usize, policy: PathPolicy) -> Vec<TrailPath> {
    let mut paths = Vec::new();
    let mut frontier = vec![PartialPath {
        cursor: trail,
        pending: Vec::new(),
        path: TrailPath::default(),
    }];
    let mut abandoned = 0usize;

    'walks: while let Some(mut walk) = frontier.pop() {
        if policy == PathPolicy::Truncating && walk.path.len() == k {
            paths.push(walk.path);
            continue;
        }

        loop {
            match walk.cursor.store() {
                TrailStore::Series(series) => {
                    if walk.path.len() == k {
                        abandoned += 1;
                        continue 'walks;
                    }
                    walk.path.mountains.push(series.mountain.clone());
                    walk.cursor = &series.following;

                    if policy == PathPolicy::Truncating && walk.path.len() == k {
                        paths.push(walk.path);
                        continue 'walks;
                    }
                }
                TrailStore::Split(split) => {
                    walk.pending.push(&split.path_follow);

                    let mut bottom = walk.clone();
                    bottom.cursor = &split.path_bottom;
                    bottom.path.choices.push(Branch::Bottom);
                    frontier.push(bottom);

                    walk.cursor = &split.path_top;
                    walk.path.choices.push(Branch::Top);
                }
                TrailStore::Empty => match walk.pending.pop() {
                    Some(next) => walk.cursor = next,
                    None => {
                        if walk.path.len() == k {
                            paths.push(walk.path);
                        } else {
                            abandoned += 1;
                        }
                        continue 'walks;
                    }
                },
            }
        }
    }

    debug!(found = paths.len(), abandoned, "path enumeration complete");
    paths
}

impl Trail {
    /// Every mountain on every path; see [`collect_all_mountains`].
    pub fn collect_all_mountains(&self) -> Vec<Mountain> {
        collect_all_mountains(self)
    }

    /// All complete paths with exactly `k` mountains; see [`length_k_paths`].
    pub fn length_k_paths(&self, k: usize) -> Vec<TrailPath> {
        length_k_paths(self, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(name: &str) -> Mountain {
        Mountain::new(name, 1, 1).unwrap()
    }

    fn single(name: &str) -> Trail {
        Trail::series(m(name), Trail::empty())
    }

    fn chain(names: &[&str]) -> Trail {
        names
            .iter()
            .rev()
            .fold(Trail::empty(), |rest, name| rest.prepend_mountain(m(name)))
    }

    fn names(mountains: &[Mountain]) -> Vec<&str> {
        mountains.iter().map(|m| m.name().as_str()).collect()
    }

    fn path_names(paths: &[TrailPath]) -> Vec<Vec<&str>> {
        paths.iter().map(|p| names(&p.mountains)).collect()
    }

    #[test]
    fn collect_on_empty_trail() {
        assert!(collect_all_mountains(&Trail::empty()).is_empty());
    }

    #[test]
    fn collect_on_series() {
        let trail = chain(&["a", "b", "c"]);
        assert_eq!(names(&trail.collect_all_mountains()), vec!["a", "b", "c"]);
    }

    #[test]
    fn collect_visits_follow_path_per_branch() {
        let trail = Trail::split(single("a"), single("b"), single("c"));
        assert_eq!(
            names(&collect_all_mountains(&trail)),
            vec!["a", "c", "b", "c"]
        );
    }

    #[test]
    fn collect_nested_splits() {
        let inner = Trail::split(single("a"), single("b"), single("c"));
        let trail = Trail::split(inner, single("d"), single("e"));
        assert_eq!(
            names(&collect_all_mountains(&trail)),
            vec!["a", "c", "e", "b", "c", "e", "d", "e"]
        );
    }

    #[test]
    fn collect_starts_with_prepended_mountain() {
        let trail = Trail::split(single("a"), single("b"), single("c"));
        let edited = trail.add_mountain_before(m("x"));
        assert_eq!(names(&collect_all_mountains(&edited))[0], "x");
    }

    #[test]
    fn zero_paths_on_empty_trail() {
        let paths = length_k_paths(&Trail::empty(), 0);
        assert_eq!(paths, vec![TrailPath::default()]);
        assert!(length_k_paths(&Trail::empty(), 1).is_empty());
    }

    #[test]
    fn zero_paths_need_a_mountain_free_route() {
        let trail = single("a");
        assert!(length_k_paths(&trail, 0).is_empty());

        let optional = Trail::split(single("a"), Trail::empty(), Trail::empty());
        let paths = length_k_paths(&optional, 0);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].choices, vec![Branch::Bottom]);
    }

    #[test]
    fn series_has_one_path_of_its_length() {
        let trail = chain(&["a", "b", "c"]);
        for k in 0..6 {
            let expected = usize::from(k == 3);
            assert_eq!(length_k_paths(&trail, k).len(), expected, "k = {k}");
        }
    }

    #[test]
    fn paths_through_a_split() {
        // top: a b, bottom: c, follow: d
        let trail = Trail::split(chain(&["a", "b"]), single("c"), single("d"));

        assert_eq!(path_names(&length_k_paths(&trail, 3)), vec![vec!["a", "b", "d"]]);
        assert_eq!(path_names(&length_k_paths(&trail, 2)), vec![vec!["c", "d"]]);
        assert!(length_k_paths(&trail, 1).is_empty());
    }

    #[test]
    fn identical_mountains_on_different_branches_are_distinct() {
        let trail = Trail::split(single("a"), single("a"), Trail::empty());
        let paths = length_k_paths(&trail, 1);

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].mountains, paths[1].mountains);
        assert_eq!(paths[0].choices, vec![Branch::Top]);
        assert_eq!(paths[1].choices, vec![Branch::Bottom]);
    }

    #[test]
    fn nested_paths_are_depth_first_top_first() {
        let inner = Trail::split(single("a"), single("b"), single("c"));
        let trail = Trail::split(inner, chain(&["d", "x"]), single("e"));

        let paths = length_k_paths(&trail, 3);

        assert_eq!(
            path_names(&paths),
            vec![vec!["a", "c", "e"], vec!["b", "c", "e"], vec!["d", "x", "e"]]
        );
        assert_eq!(paths[0].choices, vec![Branch::Top, Branch::Top]);
        assert_eq!(paths[1].choices, vec![Branch::Top, Branch::Bottom]);
        assert_eq!(paths[2].choices, vec![Branch::Bottom]);
    }

    #[test]
    fn empty_splits_after_kth_mountain_still_branch() {
        let trail = single("a");
        let with_tail_split = Trail::series(
            m("a"),
            Trail::split(Trail::empty(), Trail::empty(), Trail::empty()),
        );

        assert_eq!(length_k_paths(&trail, 1).len(), 1);
        assert_eq!(length_k_paths(&with_tail_split, 1).len(), 2);
    }

    #[test]
    fn truncating_cuts_paths_at_k() {
        let trail = Trail::split(chain(&["a", "b"]), single("c"), single("d"));

        let paths = length_k_paths_with(&trail, 2, PathPolicy::Truncating);

        assert_eq!(path_names(&paths), vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(paths[0].choices, vec![Branch::Top]);
        assert_eq!(paths[1].choices, vec![Branch::Bottom]);
    }

    #[test]
    fn truncating_zero_is_the_empty_prefix() {
        let trail = Trail::split(single("a"), single("b"), Trail::empty());
        let paths = length_k_paths_with(&trail, 0, PathPolicy::Truncating);
        assert_eq!(paths, vec![TrailPath::default()]);
    }

    #[test]
    fn truncating_drops_short_walks() {
        let trail = Trail::split(chain(&["a", "b", "c"]), single("x"), Trail::empty());
        let paths = length_k_paths_with(&trail, 2, PathPolicy::Truncating);
        assert_eq!(path_names(&paths), vec![vec!["a", "b"]]);
    }

    #[test]
    fn policy_parse_round_trip() {
        for policy in PathPolicy::all() {
            assert_eq!(policy.name().parse::<PathPolicy>(), Ok(*policy));
        }
        assert!("greedy".parse::<PathPolicy>().is_err());
        assert_eq!(PathPolicy::default(), PathPolicy::Terminating);
    }
}

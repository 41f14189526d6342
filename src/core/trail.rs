//! core::trail
//!
//! Trail representation and structural edits.
//!
//! # Architecture
//!
//! A trail is a chain of [`TrailStore`] nodes:
//! - `Empty` ends the trail
//! - `Series` is one mountain followed by the rest of the trail
//! - `Split` forks into a top and a bottom path which both rejoin at a
//!   follow path
//!
//! ```text
//!        ___path_top____
//!       /               \
//!     -<                 >-path_follow-
//!       \__path_bottom__/
//! ```
//!
//! # Invariants
//!
//! - Nodes are immutable once built; every edit returns a new node that
//!   shares the untouched sub-trails with its input
//! - The node graph is acyclic (edits can only wrap existing trails)
//! - The rejoin point of a split is always explicit (`path_follow`)

use std::fmt;
use std::sync::Arc;

use super::types::Mountain;

static EMPTY: TrailStore = TrailStore::Empty;

/// A handle to an immutable trail node.
///
/// Cloning a `Trail` is cheap: it shares the underlying node. The empty
/// trail holds no allocation.
///
/// # Example
///
/// ```
/// use trailwalk::core::trail::{Trail, TrailStore};
/// use trailwalk::core::types::Mountain;
///
/// let summit = Mountain::new("summit", 3, 4).unwrap();
/// let trail = Trail::empty().add_mountain_before(summit.clone());
///
/// match trail.store() {
///     TrailStore::Series(series) => assert_eq!(series.mountain, summit),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Default)]
pub struct Trail {
    node: Option<Arc<TrailStore>>,
}

/// The content of a trail node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrailStore {
    /// No further trail.
    #[default]
    Empty,
    /// One mountain, then a continuation.
    Series(TrailSeries),
    /// Two alternative paths rejoining at a shared follow path.
    Split(TrailSplit),
}

/// A mountain, followed by the rest of the trail.
///
/// ```text
/// --mountain--following--
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSeries {
    pub mountain: Mountain,
    pub following: Trail,
}

/// A split in the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSplit {
    pub path_top: Trail,
    pub path_bottom: Trail,
    pub path_follow: Trail,
}

impl Trail {
    /// The empty trail.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a store in a new handle.
    pub fn new(store: TrailStore) -> Self {
        match store {
            TrailStore::Empty => Self::empty(),
            store => Self {
                node: Some(Arc::new(store)),
            },
        }
    }

    /// Build `Series(mountain, following)`.
    pub fn series(mountain: Mountain, following: Trail) -> Self {
        Self::new(TrailStore::Series(TrailSeries::new(mountain, following)))
    }

    /// Build `Split(top, bottom, follow)`.
    pub fn split(top: Trail, bottom: Trail, follow: Trail) -> Self {
        Self::new(TrailStore::Split(TrailSplit::new(top, bottom, follow)))
    }

    /// The node this handle points at.
    pub fn store(&self) -> &TrailStore {
        self.node.as_deref().unwrap_or(&EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// True if both handles point at the same node.
    ///
    /// Two empty trails always share.
    pub fn ptr_eq(&self, other: &Trail) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Replace the head of the trail with `mountain`.
    ///
    /// The result is `Series(mountain, rest)` where `rest` is whatever
    /// continues after the current head: the following trail of a series,
    /// or the follow path of a split. The current head itself is not kept,
    /// so on a split both branches are dropped. Use
    /// [`Trail::prepend_mountain`] to keep everything.
    pub fn add_mountain_before(&self, mountain: Mountain) -> Trail {
        Trail::series(mountain, self.after_head())
    }

    /// Replace the head of the trail with an empty split.
    ///
    /// Same continuation rule as [`Trail::add_mountain_before`].
    pub fn add_empty_branch_before(&self) -> Trail {
        Trail::split(Trail::empty(), Trail::empty(), self.after_head())
    }

    /// Insert `mountain` before everything on the trail.
    pub fn prepend_mountain(&self, mountain: Mountain) -> Trail {
        Trail::series(mountain, self.clone())
    }

    /// Insert an empty split before everything on the trail.
    pub fn prepend_empty_branch(&self) -> Trail {
        Trail::split(Trail::empty(), Trail::empty(), self.clone())
    }

    fn after_head(&self) -> Trail {
        match self.store() {
            TrailStore::Empty => Trail::empty(),
            TrailStore::Series(series) => series.following.clone(),
            TrailStore::Split(split) => split.path_follow.clone(),
        }
    }
}

impl TrailStore {
    pub fn into_trail(self) -> Trail {
        Trail::new(self)
    }
}

impl From<TrailStore> for Trail {
    fn from(store: TrailStore) -> Self {
        Trail::new(store)
    }
}

impl TrailSeries {
    pub fn new(mountain: Mountain, following: Trail) -> Self {
        Self {
            mountain,
            following,
        }
    }

    /// Removes the mountain at the beginning of this series.
    pub fn remove_mountain(&self) -> TrailStore {
        self.following.store().clone()
    }

    /// Adds a mountain in series before the current one.
    pub fn add_mountain_before(&self, mountain: Mountain) -> TrailStore {
        TrailStore::Series(TrailSeries::new(
            mountain,
            Trail::new(TrailStore::Series(self.clone())),
        ))
    }

    /// Adds an empty branch, where the current series becomes the follow path.
    pub fn add_empty_branch_before(&self) -> TrailStore {
        TrailStore::Split(TrailSplit::new(
            Trail::empty(),
            Trail::empty(),
            Trail::new(TrailStore::Series(self.clone())),
        ))
    }

    /// Adds a mountain after the current mountain, but before the following trail.
    pub fn add_mountain_after(&self, mountain: Mountain) -> TrailStore {
        TrailStore::Series(TrailSeries::new(
            self.mountain.clone(),
            Trail::series(mountain, self.following.clone()),
        ))
    }

    /// Adds an empty branch after the current mountain, but before the following trail.
    pub fn add_empty_branch_after(&self) -> TrailStore {
        TrailStore::Series(TrailSeries::new(
            self.mountain.clone(),
            Trail::split(Trail::empty(), Trail::empty(), self.following.clone()),
        ))
    }
}

impl TrailSplit {
    pub fn new(path_top: Trail, path_bottom: Trail, path_follow: Trail) -> Self {
        Self {
            path_top,
            path_bottom,
            path_follow,
        }
    }

    /// Removes the branch, leaving only the follow path.
    pub fn remove_branch(&self) -> TrailStore {
        self.path_follow.store().clone()
    }
}

// Structural equality, compared with an explicit stack so long trails do
// not recurse once per node.
impl PartialEq for Trail {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.ptr_eq(b) {
                continue;
            }
            match (a.store(), b.store()) {
                (TrailStore::Empty, TrailStore::Empty) => {}
                (TrailStore::Series(x), TrailStore::Series(y)) => {
                    if x.mountain != y.mountain {
                        return false;
                    }
                    pending.push((&x.following, &y.following));
                }
                (TrailStore::Split(x), TrailStore::Split(y)) => {
                    pending.push((&x.path_follow, &y.path_follow));
                    pending.push((&x.path_bottom, &y.path_bottom));
                    pending.push((&x.path_top, &y.path_top));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Trail {}

impl fmt::Debug for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Trail").field(self.store()).finish()
    }
}

// Release uniquely owned nodes iteratively. Shared nodes stay alive for
// their other owners.
impl Drop for Trail {
    fn drop(&mut self) {
        let mut pending: Vec<Arc<TrailStore>> = self.node.take().into_iter().collect();

        while let Some(node) = pending.pop() {
            let Ok(mut store) = Arc::try_unwrap(node) else {
                continue;
            };
            match &mut store {
                TrailStore::Empty => {}
                TrailStore::Series(series) => pending.extend(series.following.node.take()),
                TrailStore::Split(split) => {
                    pending.extend(split.path_top.node.take());
                    pending.extend(split.path_bottom.node.take());
                    pending.extend(split.path_follow.node.take());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(name: &str) -> Mountain {
        Mountain::new(name, 1, 1).unwrap()
    }

    fn head_mountain(trail: &Trail) -> Option<&Mountain> {
        match trail.store() {
            TrailStore::Series(series) => Some(&series.mountain),
            _ => None,
        }
    }

    #[test]
    fn empty_trail_has_no_allocation() {
        let trail = Trail::empty();
        assert!(trail.is_empty());
        assert_eq!(trail.store(), &TrailStore::Empty);
        assert_eq!(Trail::new(TrailStore::Empty), trail);
    }

    #[test]
    fn add_mountain_before_on_empty() {
        let trail = Trail::empty().add_mountain_before(m("a"));

        let TrailStore::Series(series) = trail.store() else {
            panic!("expected series");
        };
        assert_eq!(series.mountain, m("a"));
        assert!(series.following.is_empty());
    }

    #[test]
    fn add_mountain_before_replaces_series_head() {
        let rest = Trail::series(m("b"), Trail::empty());
        let trail = Trail::series(m("a"), rest.clone());

        let edited = trail.add_mountain_before(m("x"));

        let TrailStore::Series(series) = edited.store() else {
            panic!("expected series");
        };
        assert_eq!(series.mountain, m("x"));
        assert!(series.following.ptr_eq(&rest));
        // The receiver is untouched.
        assert_eq!(head_mountain(&trail), Some(&m("a")));
    }

    #[test]
    fn add_mountain_before_on_split_keeps_only_follow_path() {
        let follow = Trail::series(m("c"), Trail::empty());
        let trail = Trail::split(
            Trail::series(m("a"), Trail::empty()),
            Trail::series(m("b"), Trail::empty()),
            follow.clone(),
        );

        let edited = trail.add_mountain_before(m("x"));

        let TrailStore::Series(series) = edited.store() else {
            panic!("expected series");
        };
        assert_eq!(series.mountain, m("x"));
        assert!(series.following.ptr_eq(&follow));
    }

    #[test]
    fn add_empty_branch_before_uses_same_continuation() {
        let rest = Trail::series(m("b"), Trail::empty());
        let trail = Trail::series(m("a"), rest.clone());

        let edited = trail.add_empty_branch_before();

        let TrailStore::Split(split) = edited.store() else {
            panic!("expected split");
        };
        assert!(split.path_top.is_empty());
        assert!(split.path_bottom.is_empty());
        assert!(split.path_follow.ptr_eq(&rest));

        let from_empty = Trail::empty().add_empty_branch_before();
        assert_eq!(
            from_empty,
            Trail::split(Trail::empty(), Trail::empty(), Trail::empty())
        );
    }

    #[test]
    fn prepend_keeps_everything() {
        let trail = Trail::split(
            Trail::series(m("a"), Trail::empty()),
            Trail::empty(),
            Trail::empty(),
        );

        let with_mountain = trail.prepend_mountain(m("x"));
        let TrailStore::Series(series) = with_mountain.store() else {
            panic!("expected series");
        };
        assert!(series.following.ptr_eq(&trail));

        let with_branch = trail.prepend_empty_branch();
        let TrailStore::Split(split) = with_branch.store() else {
            panic!("expected split");
        };
        assert!(split.path_follow.ptr_eq(&trail));
    }

    #[test]
    fn series_remove_mountain_returns_following() {
        let following = Trail::series(m("b"), Trail::empty());
        let series = TrailSeries::new(m("a"), following.clone());

        assert_eq!(series.remove_mountain(), following.store().clone());
        assert_eq!(
            TrailSeries::new(m("a"), Trail::empty()).remove_mountain(),
            TrailStore::Empty
        );
    }

    #[test]
    fn series_add_mountain_before_is_a_true_insert() {
        let series = TrailSeries::new(m("a"), Trail::series(m("b"), Trail::empty()));

        let store = series.add_mountain_before(m("x"));

        let expected = Trail::series(
            m("x"),
            Trail::series(m("a"), Trail::series(m("b"), Trail::empty())),
        );
        assert_eq!(store.into_trail(), expected);
    }

    #[test]
    fn series_add_mountain_after() {
        let series = TrailSeries::new(m("a"), Trail::series(m("b"), Trail::empty()));

        let store = series.add_mountain_after(m("x"));

        let expected = Trail::series(
            m("a"),
            Trail::series(m("x"), Trail::series(m("b"), Trail::empty())),
        );
        assert_eq!(store.into_trail(), expected);
    }

    #[test]
    fn series_add_empty_branch_before_wraps_series() {
        let series = TrailSeries::new(m("a"), Trail::empty());

        let store = series.add_empty_branch_before();

        let TrailStore::Split(split) = &store else {
            panic!("expected split");
        };
        assert!(split.path_top.is_empty());
        assert!(split.path_bottom.is_empty());
        assert_eq!(split.path_follow.store(), &TrailStore::Series(series));
    }

    #[test]
    fn series_add_empty_branch_after_wraps_following() {
        let following = Trail::series(m("b"), Trail::empty());
        let series = TrailSeries::new(m("a"), following.clone());

        let store = series.add_empty_branch_after();

        let TrailStore::Series(head) = &store else {
            panic!("expected series");
        };
        assert_eq!(head.mountain, m("a"));
        let TrailStore::Split(split) = head.following.store() else {
            panic!("expected split");
        };
        assert!(split.path_top.is_empty());
        assert!(split.path_bottom.is_empty());
        assert!(split.path_follow.ptr_eq(&following));
    }

    #[test]
    fn split_remove_branch_returns_follow_store() {
        let follow = Trail::series(m("c"), Trail::empty());
        let split = TrailSplit::new(
            Trail::series(m("a"), Trail::empty()),
            Trail::series(m("b"), Trail::empty()),
            follow.clone(),
        );

        assert_eq!(split.remove_branch(), follow.store().clone());

        let other = TrailSplit::new(Trail::empty(), Trail::empty(), follow.clone());
        assert_eq!(split.remove_branch(), other.remove_branch());
    }

    #[test]
    fn structural_equality_ignores_sharing() {
        let a = Trail::series(m("a"), Trail::series(m("b"), Trail::empty()));
        let b = Trail::series(m("a"), Trail::series(m("b"), Trail::empty()));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);

        let c = Trail::series(m("a"), Trail::series(m("c"), Trail::empty()));
        assert_ne!(a, c);
        assert_ne!(a, Trail::empty());
    }

    #[test]
    fn long_trail_drops_without_recursing() {
        let mut trail = Trail::empty();
        for i in 0..200_000 {
            trail = trail.prepend_mountain(m(&format!("m{i}")));
        }
        drop(trail);
    }

    #[test]
    fn shared_tail_survives_drop_of_one_owner() {
        let tail = Trail::series(m("tail"), Trail::empty());
        let first = tail.prepend_mountain(m("a"));
        let second = tail.prepend_mountain(m("b"));

        drop(first);

        let TrailStore::Series(series) = second.store() else {
            panic!("expected series");
        };
        assert_eq!(head_mountain(&series.following), Some(&m("tail")));
    }
}

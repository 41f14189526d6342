//! core::workspace
//!
//! LIFO workspace used by the engines in place of call-stack recursion.
//!
//! # Capacity
//!
//! A workspace is either growable (no limit) or bounded. A bounded
//! workspace refuses to push past its capacity and reports
//! [`WorkspaceError::Full`]; it never drops entries. Popping or peeking
//! an empty workspace reports [`WorkspaceError::Empty`].

use thiserror::Error;

/// Errors from workspace operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("workspace is empty")]
    Empty,

    #[error("workspace is full (capacity {capacity})")]
    Full { capacity: usize },
}

/// A last-in, first-out stack with an optional capacity.
///
/// # Example
///
/// ```
/// use trailwalk::core::workspace::{Workspace, WorkspaceError};
///
/// let mut ws = Workspace::bounded(2);
/// ws.push("a").unwrap();
/// ws.push("b").unwrap();
/// assert!(ws.is_full());
/// assert_eq!(ws.push("c"), Err(WorkspaceError::Full { capacity: 2 }));
///
/// assert_eq!(ws.pop(), Ok("b"));
/// assert_eq!(ws.peek(), Ok(&"a"));
/// ```
#[derive(Debug, Clone)]
pub struct Workspace<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Workspace<T> {
    /// Bounded workspaces are never smaller than this.
    pub const MIN_CAPACITY: usize = 1;

    /// A workspace with no capacity limit.
    pub fn growable() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// A workspace holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to [`Workspace::MIN_CAPACITY`].
    pub fn bounded(capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Bounded if `capacity` is set, growable otherwise.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::growable(),
        }
    }

    /// Push an entry on top.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Full` if the workspace is bounded and full.
    pub fn push(&mut self, item: T) -> Result<(), WorkspaceError> {
        if let Some(capacity) = self.capacity {
            if self.items.len() >= capacity {
                return Err(WorkspaceError::Full { capacity });
            }
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the top entry.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Empty` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T, WorkspaceError> {
        self.items.pop().ok_or(WorkspaceError::Empty)
    }

    /// Borrow the top entry without removing it.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Empty` if there is nothing to peek.
    pub fn peek(&self) -> Result<&T, WorkspaceError> {
        self.items.last().ok_or(WorkspaceError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if no entry can be pushed. Growable workspaces are never full.
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.items.len() >= capacity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The capacity limit, or `None` if growable.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Workspace<T> {
    fn default() -> Self {
        Self::growable()
    }
}

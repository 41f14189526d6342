//! core
//!
//! Core domain types, trail structure, and the engines that walk it.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Mountain, MountainName, Branch
//! - [`trail`] - Trail representation and structural edits
//! - [`workspace`] - LIFO workspace used in place of recursion
//! - [`personality`] - Walker strategies
//! - [`traversal`] - Walks one path under a personality
//! - [`enumerate`] - Lists mountains and length-k paths over all branches
//! - [`document`] - JSON trail documents
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Trails are immutable; edits share untouched sub-trails
//! - No engine recurses on trail structure
//! - All enumeration is deterministic (top branch before bottom)

pub mod config;
pub mod document;
pub mod enumerate;
pub mod personality;
pub mod trail;
pub mod traversal;
pub mod types;
pub mod workspace;

//! Trailwalk - branching trails, walkers, and path enumeration
//!
//! A trail is a chain of mountains that can fork into two alternative
//! paths and rejoin. Trailwalk builds trails through immutable structural
//! edits, walks one path through them under a pluggable personality, and
//! enumerates all mountains or all paths of a given length.
//!
//! # Architecture
//!
//! - [`core`] - Domain types, trail structure, traversal and enumeration
//! - [`cli`] - Command-line interface layer (parses args, calls core)
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! 1. Trails are never mutated in place
//! 2. Walks and enumerations never recurse on trail depth
//! 3. A failed walk produces no report

pub mod cli;
pub mod core;
pub mod ui;

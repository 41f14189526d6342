//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`trail_view`] - Text rendering of trails, walks and paths
//!
//! # Design
//!
//! All user-facing output goes through this module so quiet mode and
//! JSON mode are handled in one place.

pub mod output;
pub mod trail_view;

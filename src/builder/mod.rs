//! Builder API for ergonomic puzzle construction.
//!
//! This module provides a fluent builder, a serializable configuration form
//! and a macro for declaring puzzles. All three resolve names to ids and
//! validate the result in one place, [`PuzzleBuilder::build`].

pub mod config;
pub mod error;
pub mod macros;
pub mod puzzle;

pub use config::PuzzleConfig;
pub use error::BuildError;
pub use puzzle::PuzzleBuilder;

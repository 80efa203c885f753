//! Breadth-first search driver.
//!
//! A frontier holds paths of equal length. Each round extends every path
//! with every applicable action instance whose resulting state passes the
//! invariant registry, and the search stops at the first round that
//! produces a complete path or produces nothing at all.
//!
//! # Example
//!
//! ```rust
//! use crossing::builder::PuzzleBuilder;
//! use crossing::search::{self, SearchError};
//!
//! // every pair of passengers conflicts and the boat holds one
//! let puzzle = PuzzleBuilder::new()
//!     .carrier("farmer")
//!     .entities(["a", "b", "c"])
//!     .origin("near")
//!     .destination("far")
//!     .unsafe_combination(["a", "b"])
//!     .unsafe_combination(["a", "c"])
//!     .unsafe_combination(["b", "c"])
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(
//!     search::solve(&puzzle),
//!     Err(SearchError::SearchExhausted { .. })
//! ));
//! ```

pub mod driver;
pub mod error;
pub mod observer;
pub mod path;
pub mod solution;

pub use driver::{solve, SearchPolicy, Solver};
pub use error::SearchError;
pub use observer::{NoopObserver, SearchObserver};
pub use path::Path;
pub use solution::{SearchStats, Solution};

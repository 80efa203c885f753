//! Crossing: a rule-driven state-search engine for transfer puzzles
//!
//! Crossing solves puzzles of the river-crossing family: a set of entities
//! must be moved from an origin to a destination by a single carrier of
//! limited capacity, without ever leaving an unsafe combination of entities
//! together unsupervised and without revisiting a configuration on the same
//! path.
//!
//! The engine is pure data plus pure functions. A puzzle is configuration;
//! the search is a function from that configuration to a plan or a failure.
//!
//! # Core Concepts
//!
//! - **State**: An immutable mapping from entities to locations ([`core`])
//! - **Actions**: Declarative action kinds with domains, preconditions and effects ([`actions`])
//! - **Invariants**: State and history predicates accumulated via `Validation` ([`invariants`])
//! - **Search**: Breadth-first frontier rounds over immutable paths ([`search`])
//!
//! # Example
//!
//! ```rust
//! use crossing::builder::PuzzleBuilder;
//! use crossing::search;
//!
//! let puzzle = PuzzleBuilder::new()
//!     .carrier("farmer")
//!     .entities(["fox", "goose", "grain"])
//!     .origin("near")
//!     .destination("far")
//!     .unsafe_combination(["fox", "goose"])
//!     .unsafe_combination(["goose", "grain"])
//!     .build()
//!     .unwrap();
//!
//! let solution = search::solve(&puzzle).unwrap();
//!
//! assert_eq!(solution.crossings(), 7);
//! assert!(puzzle.is_complete(solution.final_state()));
//!
//! let replayed = puzzle.replay(solution.plan()).unwrap();
//! assert_eq!(replayed.last(), Some(solution.final_state()));
//! ```

pub mod actions;
pub mod builder;
pub mod core;
pub mod invariants;
pub mod puzzle;
pub mod search;

// Re-export commonly used types
pub use actions::{Action, ActionKind};
pub use builder::{BuildError, PuzzleBuilder};
pub use crate::core::{EntityId, Location, LocationId, WorldState};
pub use puzzle::Puzzle;
pub use search::{solve, SearchError, Solution};

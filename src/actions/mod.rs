//! Declarative action framework.
//!
//! Actions are tagged variants ([`ActionKind`]) with an enumerable argument
//! domain, a precondition and an effect. The [`ActionRegistry`] lists the
//! kinds a puzzle allows and enumerates every concrete instance in a fixed
//! order.
//!
//! # Example
//!
//! ```rust
//! use crossing::actions::{Action, ActionRegistry};
//! use crossing::builder::PuzzleBuilder;
//!
//! let puzzle = PuzzleBuilder::new()
//!     .carrier("farmer")
//!     .entity("goose")
//!     .origin("near")
//!     .destination("far")
//!     .build()
//!     .unwrap();
//!
//! let instances = ActionRegistry::standard().all_instances(&puzzle);
//! assert_eq!(instances.len(), 3);
//! assert_eq!(instances[2], Action::move_carrier());
//! ```

mod error;
mod kind;
mod registry;

pub use error::ActionError;
pub use kind::{Action, ActionArg, ActionKind};
pub use registry::ActionRegistry;

//! Validation-based invariant registry for candidate states.
//!
//! Two classes of invariants guard the search:
//! - **State invariants** look at a candidate state alone
//! - **History invariants** compare it with the states already visited on
//!   its path
//!
//! Enforcement uses Stillwater's `Validation` type so a rejected candidate
//! reports every violation at once rather than only the first.
//!
//! # Example
//!
//! ```rust
//! use crossing::invariants::{InvariantBuilder, StateInvariant};
//!
//! let registry = InvariantBuilder::new()
//!     .state(StateInvariant::CarryingCapacity)
//!     .require_pred("at-most-twenty-steps", |ctx| ctx.prior().len() <= 20)
//!     .build();
//!
//! assert_eq!(registry.state_invariants(), &[StateInvariant::CarryingCapacity]);
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::InvariantBuilder;
pub use context::CandidateContext;
pub use rules::{
    CustomInvariant, HistoryInvariant, InvariantCheck, InvariantCheckResult, InvariantRegistry,
    StateInvariant,
};
pub use violations::InvariantViolation;

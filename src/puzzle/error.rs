//! Replay errors.

use crate::actions::ActionError;
use crate::core::StateError;
use crate::invariants::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when replaying a plan from the initial state.
///
/// `step` is the zero-based index of the offending action in the plan.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Initial state violates invariants: {violations:?}")]
    UnsafeInitialState { violations: Vec<InvariantViolation> },

    #[error("Step {step}: {source}")]
    Action { step: usize, source: ActionError },

    #[error("Step {step} violates invariants: {violations:?}")]
    InvariantViolated {
        step: usize,
        violations: Vec<InvariantViolation>,
    },

    #[error(transparent)]
    State(#[from] StateError),
}

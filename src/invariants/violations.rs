//! Invariant violations.

use crate::core::{EntityId, LocationId};
use thiserror::Error;

/// A reason a candidate state was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Unsafe combination {members:?} left unsupervised at {location:?}")]
    UnsafeCombinationUnsupervised {
        members: Vec<EntityId>,
        location: LocationId,
    },

    #[error("Carrier capacity ({capacity}) exceeded (carried: {carried})")]
    CapacityExceeded { capacity: usize, carried: usize },

    #[error("State repeats the state visited at step {step}")]
    RepeatedState { step: usize },

    #[error("Custom check failed: {name}")]
    CustomCheckFailed { name: String },
}

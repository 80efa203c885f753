//! Build errors for puzzle builders and configurations.

use crate::core::StateError;
use crate::invariants::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when building a puzzle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Unknown entity '{name}'. Declare it with .entity(name) first")]
    UnknownEntity { name: String },

    #[error("Unknown location '{name}'. Declare it with .location(name) first")]
    UnknownLocation { name: String },

    #[error("Entity '{name}' declared more than once")]
    DuplicateEntity { name: String },

    #[error("Location '{name}' declared more than once")]
    DuplicateLocation { name: String },

    #[error("Carrier not specified. Call .carrier(name) before .build()")]
    MissingCarrier,

    #[error("Origin not specified. Call .origin(name) before .build()")]
    MissingOrigin,

    #[error("Destination not specified. Call .destination(name) before .build()")]
    MissingDestination,

    #[error("Origin and destination are both '{name}'")]
    OriginIsDestination { name: String },

    #[error("Unsafe combination must name at least one entity")]
    EmptyCombination,

    #[error("Unsafe combination names the carrier '{name}', which always supervises itself")]
    CarrierInCombination { name: String },

    #[error("No action kinds registered. Add at least one kind")]
    NoActions,

    #[error("move-carrier needs exactly two locations (found: {found})")]
    MoveCarrierNeedsTwoLocations { found: usize },

    #[error("Initial state violates invariants: {violations:?}")]
    UnsafeInitialState { violations: Vec<InvariantViolation> },

    #[error("Invalid puzzle configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    State(#[from] StateError),
}

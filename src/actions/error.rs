//! Action errors.

use super::kind::{ActionArg, ActionKind};
use crate::core::{EntityId, LocationId, StateError};
use thiserror::Error;

/// Errors that can occur when evaluating or applying an action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Malformed action: {kind} does not accept argument {arg:?}")]
    MalformedAction { kind: ActionKind, arg: ActionArg },

    #[error("Action kind '{kind}' is not registered for this puzzle")]
    Unregistered { kind: ActionKind },

    #[error("Precondition of {kind} not satisfied for argument {arg:?}")]
    PreconditionFailed { kind: ActionKind, arg: ActionArg },

    #[error("Carrier {carrier:?} is not at a declared location")]
    CarrierDetached { carrier: EntityId },

    #[error("No location opposite {from:?} for move-carrier")]
    NoOpposite { from: LocationId },

    #[error(transparent)]
    State(#[from] StateError),
}

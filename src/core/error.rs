//! State query errors.

use super::ids::EntityId;
use thiserror::Error;

/// Errors raised when a state does not fit the entities being asked about.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Unknown entity {entity:?} (state holds {count} entities)")]
    UnknownEntity { entity: EntityId, count: usize },

    #[error("State holds {found} entities but the puzzle declares {expected}")]
    SizeMismatch { expected: usize, found: usize },
}

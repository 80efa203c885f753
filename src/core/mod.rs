//! Core state model.
//!
//! This module contains the pure data layer of the engine:
//! - Identifiers for entities and locations
//! - The immutable [`WorldState`] mapping and its queries
//!
//! Nothing here knows about puzzle rules. Legality of a move is decided by
//! the action and invariant registries.

mod error;
mod ids;
mod state;

pub use error::StateError;
pub use ids::{EntityId, Location, LocationId};
pub use state::WorldState;

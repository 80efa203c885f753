//! Identifiers for entities and locations.
//!
//! Identifiers are plain indices into the tables of a validated
//! [`Puzzle`](crate::puzzle::Puzzle). Names live in the puzzle, never in the
//! identifiers, so states stay small and cheap to compare.

use serde::{Deserialize, Serialize};

/// Identifier of an entity declared by a puzzle.
///
/// # Example
///
/// ```rust
/// use crossing::core::EntityId;
///
/// let fox = EntityId::new(1);
/// assert_eq!(fox.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(usize);

impl EntityId {
    /// Create an identifier from its position in the entity table.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the entity in the entity table.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Identifier of a location declared by a puzzle.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(usize);

impl LocationId {
    /// Create an identifier from its position in the location table.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the location in the location table.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Where an entity is.
///
/// Every entity always has a `Location`. An entity riding with the carrier
/// is at the reserved pseudo-location [`Location::WithCarrier`] rather than
/// being absent from the state.
///
/// # Example
///
/// ```rust
/// use crossing::core::{Location, LocationId};
///
/// let bank = Location::At(LocationId::new(0));
/// assert_eq!(bank.site(), Some(LocationId::new(0)));
/// assert_eq!(Location::WithCarrier.site(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    /// At a declared location.
    At(LocationId),
    /// Carried by the carrier, wherever the carrier is.
    WithCarrier,
}

impl Location {
    /// The declared location, if this is not the carried pseudo-location.
    pub fn site(self) -> Option<LocationId> {
        match self {
            Self::At(id) => Some(id),
            Self::WithCarrier => None,
        }
    }

    /// Check if this is the carried pseudo-location.
    pub fn is_carried(self) -> bool {
        matches!(self, Self::WithCarrier)
    }
}

impl From<LocationId> for Location {
    fn from(id: LocationId) -> Self {
        Self::At(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_site_extracts_declared_location() {
        let id = LocationId::new(3);
        assert_eq!(Location::At(id).site(), Some(id));
        assert_eq!(Location::WithCarrier.site(), None);
    }

    #[test]
    fn location_from_id() {
        let location: Location = LocationId::new(1).into();
        assert_eq!(location, Location::At(LocationId::new(1)));
        assert!(!location.is_carried());
        assert!(Location::WithCarrier.is_carried());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&EntityId::new(2)).unwrap();
        assert_eq!(json, "2");

        let location = Location::At(LocationId::new(1));
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }
}

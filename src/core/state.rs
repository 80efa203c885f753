//! World states: the entity → location mapping searched over.
//!
//! A [`WorldState`] is an immutable value. Every query is pure and every
//! modification returns a new state, so the same value can sit in the log
//! of one path and in the frontier of the next round.

use super::error::StateError;
use super::ids::{EntityId, Location};
use serde::{Deserialize, Serialize};

/// Total mapping from every entity of a puzzle to exactly one [`Location`].
///
/// Two states are equal when every entity has the same location in both,
/// regardless of how either state was reached.
///
/// # Example
///
/// ```rust
/// use crossing::core::{EntityId, Location, LocationId, WorldState};
///
/// let near = Location::At(LocationId::new(0));
/// let state = WorldState::uniform(3, near);
///
/// let moved = state.move_entity(EntityId::new(1), Location::WithCarrier).unwrap();
/// assert_eq!(moved.location_of(EntityId::new(1)).unwrap(), Location::WithCarrier);
/// assert_eq!(state.location_of(EntityId::new(1)).unwrap(), near); // original unchanged
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    locations: Vec<Location>,
}

impl WorldState {
    /// Create a state from one location per entity, in entity order.
    pub fn from_locations(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Create a state with `count` entities all at `location`.
    pub fn uniform(count: usize, location: Location) -> Self {
        Self {
            locations: vec![location; count],
        }
    }

    /// Number of entities in the mapping.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the mapping holds no entities.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over `(entity, location)` pairs in entity order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (EntityId::new(index), *location))
    }

    /// Get the location of an entity.
    ///
    /// Total over the entities the state was built with; any other id is
    /// reported as [`StateError::UnknownEntity`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossing::core::{EntityId, Location, LocationId, StateError, WorldState};
    ///
    /// let state = WorldState::uniform(2, Location::At(LocationId::new(0)));
    /// assert!(state.location_of(EntityId::new(1)).is_ok());
    /// assert!(matches!(
    ///     state.location_of(EntityId::new(5)),
    ///     Err(StateError::UnknownEntity { .. })
    /// ));
    /// ```
    pub fn location_of(&self, entity: EntityId) -> Result<Location, StateError> {
        self.locations
            .get(entity.index())
            .copied()
            .ok_or(StateError::UnknownEntity {
                entity,
                count: self.locations.len(),
            })
    }

    /// Get the common location of a set of entities.
    ///
    /// Returns `Some(location)` when every listed entity is at the same
    /// location and `None` when they are split up. A single entity trivially
    /// yields its own location; an empty set yields `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossing::core::{EntityId, Location, LocationId, WorldState};
    ///
    /// let near = Location::At(LocationId::new(0));
    /// let state = WorldState::uniform(3, near)
    ///     .move_entity(EntityId::new(2), Location::WithCarrier)
    ///     .unwrap();
    ///
    /// let pair = [EntityId::new(0), EntityId::new(1)];
    /// assert_eq!(state.together(&pair).unwrap(), Some(near));
    ///
    /// let split = [EntityId::new(0), EntityId::new(2)];
    /// assert_eq!(state.together(&split).unwrap(), None);
    /// ```
    pub fn together(&self, entities: &[EntityId]) -> Result<Option<Location>, StateError> {
        let Some((first, rest)) = entities.split_first() else {
            return Ok(None);
        };

        let shared = self.location_of(*first)?;
        for entity in rest {
            if self.location_of(*entity)? != shared {
                return Ok(None);
            }
        }
        Ok(Some(shared))
    }

    /// Check if an entity is at the same location as the carrier.
    ///
    /// The carrier is trivially with itself; callers that need "some other
    /// entity is with the carrier" must exclude the carrier themselves.
    pub fn is_with_carrier(&self, entity: EntityId, carrier: EntityId) -> Result<bool, StateError> {
        Ok(self.location_of(entity)? == self.location_of(carrier)?)
    }

    /// All entities at `location`, in entity order.
    pub fn entities_at(&self, location: Location) -> Vec<EntityId> {
        self.iter()
            .filter(|(_, at)| *at == location)
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Entities riding with the carrier.
    pub fn carried(&self) -> Vec<EntityId> {
        self.entities_at(Location::WithCarrier)
    }

    /// Return a new state with only `entity` relocated.
    ///
    /// No rules are checked here: whether the move is legal is decided by
    /// the action and invariant registries. The only failure is an entity id
    /// outside the mapping.
    pub fn move_entity(&self, entity: EntityId, to: Location) -> Result<Self, StateError> {
        let mut locations = self.locations.clone();
        let count = locations.len();
        let slot = locations
            .get_mut(entity.index())
            .ok_or(StateError::UnknownEntity { entity, count })?;
        *slot = to;
        Ok(Self { locations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LocationId;

    fn near() -> Location {
        Location::At(LocationId::new(0))
    }

    fn far() -> Location {
        Location::At(LocationId::new(1))
    }

    #[test]
    fn location_of_is_total_over_declared_entities() {
        let state = WorldState::uniform(4, near());
        for index in 0..4 {
            assert_eq!(state.location_of(EntityId::new(index)).unwrap(), near());
        }
    }

    #[test]
    fn location_of_rejects_unknown_entity() {
        let state = WorldState::uniform(2, near());
        let result = state.location_of(EntityId::new(2));
        assert_eq!(
            result,
            Err(StateError::UnknownEntity {
                entity: EntityId::new(2),
                count: 2,
            })
        );
    }

    #[test]
    fn together_single_entity_returns_its_location() {
        let state = WorldState::from_locations(vec![near(), far()]);
        assert_eq!(state.together(&[EntityId::new(1)]).unwrap(), Some(far()));
    }

    #[test]
    fn together_empty_set_is_none() {
        let state = WorldState::uniform(2, near());
        assert_eq!(state.together(&[]).unwrap(), None);
    }

    #[test]
    fn together_propagates_unknown_entity() {
        let state = WorldState::uniform(2, near());
        assert!(state
            .together(&[EntityId::new(0), EntityId::new(9)])
            .is_err());
    }

    #[test]
    fn is_with_carrier_compares_locations() {
        let carrier = EntityId::new(0);
        let state = WorldState::from_locations(vec![far(), far(), near()]);

        assert!(state.is_with_carrier(EntityId::new(1), carrier).unwrap());
        assert!(!state.is_with_carrier(EntityId::new(2), carrier).unwrap());
        assert!(state.is_with_carrier(carrier, carrier).unwrap());
    }

    #[test]
    fn entities_at_preserves_entity_order() {
        let state = WorldState::from_locations(vec![far(), near(), far(), Location::WithCarrier]);

        assert_eq!(
            state.entities_at(far()),
            vec![EntityId::new(0), EntityId::new(2)]
        );
        assert_eq!(state.carried(), vec![EntityId::new(3)]);
        assert!(state
            .entities_at(Location::At(LocationId::new(7)))
            .is_empty());
    }

    #[test]
    fn move_entity_changes_only_that_entity() {
        let state = WorldState::uniform(3, near());
        let moved = state.move_entity(EntityId::new(1), far()).unwrap();

        assert_eq!(moved.location_of(EntityId::new(0)).unwrap(), near());
        assert_eq!(moved.location_of(EntityId::new(1)).unwrap(), far());
        assert_eq!(moved.location_of(EntityId::new(2)).unwrap(), near());
        assert_eq!(state, WorldState::uniform(3, near()));
    }

    #[test]
    fn states_compare_structurally() {
        let a = WorldState::uniform(2, near())
            .move_entity(EntityId::new(0), far())
            .unwrap();
        let b = WorldState::from_locations(vec![far(), near()]);
        assert_eq!(a, b);
    }

    #[test]
    fn state_serializes_as_location_list() {
        let state = WorldState::from_locations(vec![near(), Location::WithCarrier]);
        let json = serde_json::to_string(&state).unwrap();
        let back: WorldState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

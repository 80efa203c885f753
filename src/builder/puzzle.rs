//! Builder for constructing puzzles.

use crate::actions::{ActionKind, ActionRegistry};
use crate::builder::error::BuildError;
use crate::core::{EntityId, Location, LocationId, WorldState};
use crate::invariants::{CandidateContext, InvariantRegistry};
use crate::puzzle::Puzzle;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing puzzles with a fluent API.
///
/// Names are resolved to ids in [`build`](Self::build), so declarations may
/// come in any order.
///
/// # Example
///
/// ```rust
/// use crossing::builder::PuzzleBuilder;
///
/// let puzzle = PuzzleBuilder::new()
///     .carrier("farmer")
///     .entities(["fox", "goose", "grain"])
///     .origin("near")
///     .destination("far")
///     .unsafe_combination(["fox", "goose"])
///     .unsafe_combination(["goose", "grain"])
///     .build()
///     .unwrap();
///
/// assert_eq!(puzzle.entity_count(), 4);
/// assert_eq!(puzzle.capacity(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PuzzleBuilder {
    entities: Vec<String>,
    locations: Vec<String>,
    carrier: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    capacity: Option<usize>,
    unsafe_combinations: Vec<Vec<String>>,
    routes: Vec<(String, String)>,
    placements: Vec<(String, String)>,
    actions: Option<Vec<ActionKind>>,
    invariants: Option<InvariantRegistry>,
    duplicates: Vec<BuildError>,
}

impl PuzzleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity.
    pub fn entity(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.entities.contains(&name) {
            self.duplicates.push(BuildError::DuplicateEntity { name });
        } else {
            self.entities.push(name);
        }
        self
    }

    /// Declare several entities at once.
    pub fn entities<I, N>(self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        names.into_iter().fold(self, |builder, name| builder.entity(name))
    }

    /// Set the carrier (required). Declares the entity if it is not yet known.
    pub fn carrier(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.entities.contains(&name) {
            self.entities.push(name.clone());
        }
        self.carrier = Some(name);
        self
    }

    /// Declare a location.
    pub fn location(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.locations.contains(&name) {
            self.duplicates.push(BuildError::DuplicateLocation { name });
        } else {
            self.locations.push(name);
        }
        self
    }

    /// Set the origin (required). Declares the location if it is not yet known.
    pub fn origin(mut self, name: impl Into<String>) -> Self {
        let name = self.declare_location(name.into());
        self.origin = Some(name);
        self
    }

    /// Set the destination (required). Declares the location if it is not yet known.
    pub fn destination(mut self, name: impl Into<String>) -> Self {
        let name = self.declare_location(name.into());
        self.destination = Some(name);
        self
    }

    /// Set the carrying capacity (default 1).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Add a set of entities that may not share a location without the carrier.
    pub fn unsafe_combination<I, N>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.unsafe_combinations
            .push(members.into_iter().map(Into::into).collect());
        self
    }

    /// Allow the carrier to travel between two locations in either direction.
    ///
    /// Without any route every pair of locations is adjacent.
    pub fn route(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.routes.push((a.into(), b.into()));
        self
    }

    /// Place an entity somewhere other than the origin in the initial state.
    pub fn place(mut self, entity: impl Into<String>, location: impl Into<String>) -> Self {
        self.placements.push((entity.into(), location.into()));
        self
    }

    /// Set the action kinds, in enumeration order.
    pub fn actions(mut self, kinds: impl IntoIterator<Item = ActionKind>) -> Self {
        self.actions = Some(kinds.into_iter().collect());
        self
    }

    /// Set the invariant registry (default: every built-in invariant).
    pub fn invariants(mut self, invariants: InvariantRegistry) -> Self {
        self.invariants = Some(invariants);
        self
    }

    /// Build the puzzle.
    /// Returns an error if a role is missing, a name does not resolve or the
    /// initial state violates the registered invariants.
    pub fn build(self) -> Result<Puzzle, BuildError> {
        if let Some(error) = self.duplicates.into_iter().next() {
            return Err(error);
        }

        let entities = self.entities;
        let locations = self.locations;

        let carrier_name = self.carrier.ok_or(BuildError::MissingCarrier)?;
        let origin_name = self.origin.ok_or(BuildError::MissingOrigin)?;
        let destination_name = self.destination.ok_or(BuildError::MissingDestination)?;
        if origin_name == destination_name {
            return Err(BuildError::OriginIsDestination { name: origin_name });
        }

        let carrier = resolve_entity(&entities, &carrier_name)?;
        let origin = resolve_location(&locations, &origin_name)?;
        let destination = resolve_location(&locations, &destination_name)?;

        let unsafe_combinations = self
            .unsafe_combinations
            .iter()
            .map(|members| resolve_combination(&entities, carrier, members))
            .collect::<Result<Vec<_>, _>>()?;

        let routes = self
            .routes
            .iter()
            .map(|(a, b)| -> Result<_, BuildError> {
                Ok((resolve_location(&locations, a)?, resolve_location(&locations, b)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut initial = WorldState::uniform(entities.len(), Location::At(origin));
        for (name, location) in &self.placements {
            let entity = resolve_entity(&entities, name)?;
            let location = resolve_location(&locations, location)?;
            initial = initial
                .move_entity(entity, Location::At(location))
                .map_err(|_| BuildError::UnknownEntity { name: name.clone() })?;
        }

        let actions = ActionRegistry::new(self.actions.unwrap_or_else(|| {
            ActionRegistry::standard().kinds().to_vec()
        }));
        if actions.is_empty() {
            return Err(BuildError::NoActions);
        }
        if actions.contains(ActionKind::MoveCarrier) && locations.len() != 2 {
            return Err(BuildError::MoveCarrierNeedsTwoLocations {
                found: locations.len(),
            });
        }

        let puzzle = Puzzle {
            entities,
            locations,
            carrier,
            origin,
            destination,
            capacity: self.capacity.unwrap_or(1),
            unsafe_combinations,
            routes,
            initial,
            actions,
            invariants: self.invariants.unwrap_or_default(),
        };

        let context = CandidateContext::new(&puzzle, &puzzle.initial, &[])?;
        if let Validation::Failure(errors) = puzzle.invariants.enforce(&context) {
            return Err(BuildError::UnsafeInitialState {
                violations: errors.iter().cloned().collect(),
            });
        }

        debug!(
            entities = puzzle.entity_count(),
            locations = puzzle.location_count(),
            capacity = puzzle.capacity(),
            unsafe_combinations = puzzle.unsafe_combinations().len(),
            actions = puzzle.actions().len(),
            "Puzzle configuration validated"
        );

        Ok(puzzle)
    }

    fn declare_location(&mut self, name: String) -> String {
        if !self.locations.contains(&name) {
            self.locations.push(name.clone());
        }
        name
    }
}

fn resolve_entity(entities: &[String], name: &str) -> Result<EntityId, BuildError> {
    entities
        .iter()
        .position(|candidate| candidate == name)
        .map(EntityId::new)
        .ok_or_else(|| BuildError::UnknownEntity {
            name: name.to_string(),
        })
}

fn resolve_location(locations: &[String], name: &str) -> Result<LocationId, BuildError> {
    locations
        .iter()
        .position(|candidate| candidate == name)
        .map(LocationId::new)
        .ok_or_else(|| BuildError::UnknownLocation {
            name: name.to_string(),
        })
}

fn resolve_combination(
    entities: &[String],
    carrier: EntityId,
    members: &[String],
) -> Result<Vec<EntityId>, BuildError> {
    if members.is_empty() {
        return Err(BuildError::EmptyCombination);
    }

    let mut ids = Vec::with_capacity(members.len());
    for name in members {
        let id = resolve_entity(entities, name)?;
        if id == carrier {
            return Err(BuildError::CarrierInCombination { name: name.clone() });
        }
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids.sort();
    Ok(ids)
}

//! Validated puzzle configuration and goal test.
//!
//! A [`Puzzle`] is the immutable input of the search: the declared entities
//! and locations, the carrier and its capacity, the unsafe combinations, the
//! initial state and the action and invariant registries. It is produced by
//! [`PuzzleBuilder`](crate::builder::PuzzleBuilder), the
//! [`puzzle!`](crate::puzzle!) macro or [`Puzzle::from_json`].

mod error;

pub use error::ReplayError;

use crate::actions::{Action, ActionArg, ActionError, ActionRegistry};
use crate::builder::{BuildError, PuzzleConfig};
use crate::core::{EntityId, Location, LocationId, WorldState};
use crate::invariants::{CandidateContext, InvariantRegistry};
use stillwater::validation::Validation;

/// A fully resolved puzzle instance.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) entities: Vec<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) carrier: EntityId,
    pub(crate) origin: LocationId,
    pub(crate) destination: LocationId,
    pub(crate) capacity: usize,
    pub(crate) unsafe_combinations: Vec<Vec<EntityId>>,
    pub(crate) routes: Vec<(LocationId, LocationId)>,
    pub(crate) initial: WorldState,
    pub(crate) actions: ActionRegistry,
    pub(crate) invariants: InvariantRegistry,
}

impl Puzzle {
    /// Parse and validate a JSON puzzle configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossing::puzzle::Puzzle;
    ///
    /// let puzzle = Puzzle::from_json(r#"{
    ///     "carrier": "farmer",
    ///     "entities": ["farmer", "goose"],
    ///     "locations": ["near", "far"],
    ///     "origin": "near",
    ///     "destination": "far"
    /// }"#).unwrap();
    ///
    /// assert_eq!(puzzle.entity_count(), 2);
    /// assert!(!puzzle.is_complete(puzzle.initial_state()));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        PuzzleConfig::from_json(json)?.build()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Every entity, carrier included, in declared order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> {
        (0..self.entities.len()).map(EntityId::new)
    }

    /// Every entity except the carrier, in declared order.
    pub fn movable(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities().filter(move |entity| *entity != self.carrier)
    }

    /// Every declared location, in declared order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> {
        (0..self.locations.len()).map(LocationId::new)
    }

    pub fn carrier(&self) -> EntityId {
        self.carrier
    }

    pub fn origin(&self) -> LocationId {
        self.origin
    }

    pub fn destination(&self) -> LocationId {
        self.destination
    }

    /// Maximum number of entities the carrier holds at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn unsafe_combinations(&self) -> &[Vec<EntityId>] {
        &self.unsafe_combinations
    }

    /// Declared routes. Empty means every pair of locations is adjacent.
    pub fn routes(&self) -> &[(LocationId, LocationId)] {
        &self.routes
    }

    pub fn initial_state(&self) -> &WorldState {
        &self.initial
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn invariants(&self) -> &InvariantRegistry {
        &self.invariants
    }

    pub fn is_movable(&self, entity: EntityId) -> bool {
        entity.index() < self.entities.len() && entity != self.carrier
    }

    pub fn has_location(&self, location: LocationId) -> bool {
        location.index() < self.locations.len()
    }

    /// Check if the carrier can travel directly between two distinct locations.
    pub fn is_adjacent(&self, from: LocationId, to: LocationId) -> bool {
        if from == to || !self.has_location(from) || !self.has_location(to) {
            return false;
        }
        self.routes.is_empty()
            || self
                .routes
                .iter()
                .any(|&(a, b)| (a, b) == (from, to) || (b, a) == (from, to))
    }

    pub fn entity_id(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .position(|candidate| candidate == name)
            .map(EntityId::new)
    }

    pub fn entity_name(&self, entity: EntityId) -> Option<&str> {
        self.entities.get(entity.index()).map(String::as_str)
    }

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|candidate| candidate == name)
            .map(LocationId::new)
    }

    pub fn location_name(&self, location: LocationId) -> Option<&str> {
        self.locations.get(location.index()).map(String::as_str)
    }

    /// Goal test: every entity, carrier included, is at the destination.
    pub fn is_complete(&self, state: &WorldState) -> bool {
        let everyone: Vec<EntityId> = self.entities().collect();
        matches!(
            state.together(&everyone),
            Ok(Some(Location::At(site))) if site == self.destination
        ) && state.len() == self.entity_count()
    }

    /// Apply one action with full checking: registration, argument domain
    /// and precondition. Invariants are not consulted.
    pub fn apply(&self, state: &WorldState, action: &Action) -> Result<WorldState, ActionError> {
        self.actions.validate(self, action)?;
        if !action.kind.precondition(self, state, action.arg)? {
            return Err(ActionError::PreconditionFailed {
                kind: action.kind,
                arg: action.arg,
            });
        }
        action.kind.effect(self, state, action.arg)
    }

    /// Replay a plan from the initial state.
    ///
    /// The initial state and every state produced by [`apply`](Self::apply)
    /// must satisfy the registered invariants. Returns the visited
    /// states: the initial state followed by one state per action.
    pub fn replay(&self, plan: &[Action]) -> Result<Vec<WorldState>, ReplayError> {
        let context = CandidateContext::new(self, &self.initial, &[])?;
        if let Validation::Failure(errors) = self.invariants.enforce(&context) {
            return Err(ReplayError::UnsafeInitialState {
                violations: errors.iter().cloned().collect(),
            });
        }

        let mut visited = vec![self.initial.clone()];
        for (step, action) in plan.iter().enumerate() {
            let current = visited.last().unwrap_or(&self.initial);
            let next = self
                .apply(current, action)
                .map_err(|source| ReplayError::Action { step, source })?;

            let context = CandidateContext::new(self, &next, &visited)?;
            if let Validation::Failure(errors) = self.invariants.enforce(&context) {
                return Err(ReplayError::InvariantViolated {
                    step,
                    violations: errors.iter().cloned().collect(),
                });
            }
            visited.push(next);
        }

        Ok(visited)
    }

    /// Render an action with entity and location names, e.g. `pick-up(goose)`.
    pub fn describe(&self, action: &Action) -> String {
        let arg = match action.arg {
            ActionArg::None => String::new(),
            ActionArg::Entity(entity) => self
                .entity_name(entity)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", entity.index())),
            ActionArg::Location(location) => self
                .location_name(location)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", location.index())),
        };
        format!("{}({})", action.kind, arg)
    }

    /// Render a location by name; the carried pseudo-location is `with-carrier`.
    pub fn describe_location(&self, location: Location) -> String {
        match location {
            Location::At(site) => self
                .location_name(site)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", site.index())),
            Location::WithCarrier => "with-carrier".to_string(),
        }
    }

    /// Render a state as `location: entities` groups, e.g.
    /// `near: fox, grain | far: farmer, goose | with-carrier: -`.
    pub fn describe_state(&self, state: &WorldState) -> String {
        self.location_ids()
            .map(Location::At)
            .chain(std::iter::once(Location::WithCarrier))
            .map(|location| {
                let names: Vec<&str> = state
                    .entities_at(location)
                    .into_iter()
                    .filter_map(|entity| self.entity_name(entity))
                    .collect();
                let names = if names.is_empty() {
                    "-".to_string()
                } else {
                    names.join(", ")
                };
                format!("{}: {}", self.describe_location(location), names)
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKind;
    use crate::builder::PuzzleBuilder;
    use crate::invariants::InvariantViolation;

    fn ferry() -> Puzzle {
        PuzzleBuilder::new()
            .carrier("farmer")
            .entity("fox")
            .entity("goose")
            .entity("grain")
            .origin("near")
            .destination("far")
            .unsafe_combination(["fox", "goose"])
            .unsafe_combination(["goose", "grain"])
            .build()
            .unwrap()
    }

    fn id(puzzle: &Puzzle, name: &str) -> EntityId {
        puzzle.entity_id(name).unwrap()
    }

    #[test]
    fn goal_requires_everyone_at_destination() {
        let puzzle = ferry();
        let far = Location::At(puzzle.destination());

        assert!(!puzzle.is_complete(puzzle.initial_state()));
        assert!(puzzle.is_complete(&WorldState::uniform(4, far)));

        let carried = WorldState::uniform(4, far)
            .move_entity(id(&puzzle, "goose"), Location::WithCarrier)
            .unwrap();
        assert!(!puzzle.is_complete(&carried));
    }

    #[test]
    fn goal_rejects_states_of_the_wrong_size() {
        let puzzle = ferry();
        let far = Location::At(puzzle.destination());
        assert!(!puzzle.is_complete(&WorldState::uniform(3, far)));
    }

    #[test]
    fn movable_excludes_carrier() {
        let puzzle = ferry();
        let movable: Vec<EntityId> = puzzle.movable().collect();
        assert_eq!(movable.len(), 3);
        assert!(!movable.contains(&puzzle.carrier()));
        assert!(!puzzle.is_movable(puzzle.carrier()));
        assert!(!puzzle.is_movable(EntityId::new(4)));
    }

    #[test]
    fn adjacency_defaults_to_fully_connected() {
        let puzzle = ferry();
        assert!(puzzle.is_adjacent(puzzle.origin(), puzzle.destination()));
        assert!(!puzzle.is_adjacent(puzzle.origin(), puzzle.origin()));
        assert!(!puzzle.is_adjacent(puzzle.origin(), LocationId::new(9)));
    }

    #[test]
    fn apply_reports_failed_precondition() {
        let puzzle = ferry();
        let result = puzzle.apply(puzzle.initial_state(), &Action::put_down(id(&puzzle, "fox")));
        assert!(matches!(
            result,
            Err(ActionError::PreconditionFailed {
                kind: ActionKind::PutDown,
                ..
            })
        ));
    }

    #[test]
    fn replay_returns_every_visited_state() {
        let puzzle = ferry();
        let goose = id(&puzzle, "goose");
        let plan = [
            Action::pick_up(goose),
            Action::move_carrier(),
            Action::put_down(goose),
        ];

        let visited = puzzle.replay(&plan).unwrap();
        assert_eq!(visited.len(), 4);
        assert_eq!(&visited[0], puzzle.initial_state());
        assert_eq!(
            visited[3].location_of(goose).unwrap(),
            Location::At(puzzle.destination())
        );
    }

    #[test]
    fn replay_stops_at_invariant_violation() {
        let puzzle = ferry();
        let plan = [Action::move_carrier()];

        let error = puzzle.replay(&plan).unwrap_err();
        match error {
            ReplayError::InvariantViolated { step, violations } => {
                assert_eq!(step, 0);
                assert!(violations.iter().all(|v| matches!(
                    v,
                    InvariantViolation::UnsafeCombinationUnsupervised { .. }
                )));
            }
            other => panic!("Expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn replay_rejects_an_unsafe_initial_state() {
        let mut puzzle = ferry();
        let far = Location::At(puzzle.destination());
        puzzle.initial = puzzle
            .initial
            .move_entity(id(&puzzle, "fox"), far)
            .and_then(|state| state.move_entity(id(&puzzle, "goose"), far))
            .unwrap();

        assert_eq!(
            puzzle.replay(&[]),
            Err(ReplayError::UnsafeInitialState {
                violations: vec![InvariantViolation::UnsafeCombinationUnsupervised {
                    members: puzzle.unsafe_combinations()[0].clone(),
                    location: puzzle.destination(),
                }]
            })
        );
    }

    #[test]
    fn replay_reports_step_of_malformed_action() {
        let puzzle = ferry();
        let goose = id(&puzzle, "goose");
        let plan = [
            Action::pick_up(goose),
            Action::new(ActionKind::MoveCarrier, ActionArg::Entity(goose)),
        ];

        assert!(matches!(
            puzzle.replay(&plan),
            Err(ReplayError::Action {
                step: 1,
                source: ActionError::MalformedAction { .. }
            })
        ));
    }

    #[test]
    fn describe_uses_names() {
        let puzzle = ferry();
        assert_eq!(
            puzzle.describe(&Action::pick_up(id(&puzzle, "goose"))),
            "pick-up(goose)"
        );
        assert_eq!(puzzle.describe(&Action::move_carrier()), "move-carrier()");
        assert_eq!(
            puzzle.describe_state(puzzle.initial_state()),
            "near: farmer, fox, goose, grain | far: - | with-carrier: -"
        );
    }
}

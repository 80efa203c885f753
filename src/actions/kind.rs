//! Action kinds: argument domains, preconditions and effects.
//!
//! Each kind is one variant of [`ActionKind`]. Dispatch is a plain `match`,
//! and names resolve through a fixed lookup table so configurations can
//! refer to kinds by name.

use super::error::ActionError;
use crate::core::{EntityId, Location, LocationId, WorldState};
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The vocabulary of moves the engine knows how to enumerate and apply.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// Load a movable entity that shares the carrier's location.
    PickUp,
    /// Unload a carried entity at the carrier's location.
    PutDown,
    /// Move the carrier to the other location of a two-location puzzle.
    MoveCarrier,
    /// Move the carrier to an adjacent location.
    TravelTo,
}

const NAMES: [(ActionKind, &str); 4] = [
    (ActionKind::PickUp, "pick-up"),
    (ActionKind::PutDown, "put-down"),
    (ActionKind::MoveCarrier, "move-carrier"),
    (ActionKind::TravelTo, "travel-to"),
];

/// Concrete argument of an action instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionArg {
    /// Sentinel for kinds that take no argument.
    None,
    Entity(EntityId),
    Location(LocationId),
}

/// A concrete action instance: a kind applied to one argument from its domain.
///
/// # Example
///
/// ```rust
/// use crossing::actions::{Action, ActionArg, ActionKind};
/// use crossing::core::EntityId;
///
/// let action = Action::pick_up(EntityId::new(2));
/// assert_eq!(action.kind, ActionKind::PickUp);
/// assert_eq!(action.arg, ActionArg::Entity(EntityId::new(2)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub arg: ActionArg,
}

impl Action {
    pub fn new(kind: ActionKind, arg: ActionArg) -> Self {
        Self { kind, arg }
    }

    pub fn pick_up(entity: EntityId) -> Self {
        Self::new(ActionKind::PickUp, ActionArg::Entity(entity))
    }

    pub fn put_down(entity: EntityId) -> Self {
        Self::new(ActionKind::PutDown, ActionArg::Entity(entity))
    }

    pub fn move_carrier() -> Self {
        Self::new(ActionKind::MoveCarrier, ActionArg::None)
    }

    pub fn travel_to(location: LocationId) -> Self {
        Self::new(ActionKind::TravelTo, ActionArg::Location(location))
    }

    /// Check if this action moves the carrier between locations.
    pub fn is_crossing(&self) -> bool {
        matches!(self.kind, ActionKind::MoveCarrier | ActionKind::TravelTo)
    }
}

impl ActionKind {
    /// Every kind, in canonical order.
    pub const ALL: [ActionKind; 4] = [
        ActionKind::PickUp,
        ActionKind::PutDown,
        ActionKind::MoveCarrier,
        ActionKind::TravelTo,
    ];

    /// Get the kind's configuration name.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }

    /// Look a kind up by its configuration name.
    ///
    /// ```rust
    /// use crossing::actions::ActionKind;
    ///
    /// assert_eq!(ActionKind::from_name("put-down"), Some(ActionKind::PutDown));
    /// assert_eq!(ActionKind::from_name("row"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(kind, _)| *kind)
    }

    /// Enumerate every concrete argument of this kind, in declared order.
    pub fn domain(self, puzzle: &Puzzle) -> Vec<ActionArg> {
        match self {
            Self::PickUp | Self::PutDown => puzzle.movable().map(ActionArg::Entity).collect(),
            Self::MoveCarrier => vec![ActionArg::None],
            Self::TravelTo => puzzle.location_ids().map(ActionArg::Location).collect(),
        }
    }

    /// Check if `arg` belongs to this kind's domain.
    pub fn accepts(self, puzzle: &Puzzle, arg: ActionArg) -> bool {
        match (self, arg) {
            (Self::PickUp | Self::PutDown, ActionArg::Entity(entity)) => puzzle.is_movable(entity),
            (Self::MoveCarrier, ActionArg::None) => true,
            (Self::TravelTo, ActionArg::Location(location)) => puzzle.has_location(location),
            _ => false,
        }
    }

    /// Evaluate whether an instance may be attempted in `state`.
    ///
    /// Preconditions describe applicability only; whether the resulting
    /// state is safe is decided by the invariant registry.
    pub fn precondition(
        self,
        puzzle: &Puzzle,
        state: &WorldState,
        arg: ActionArg,
    ) -> Result<bool, ActionError> {
        self.ensure_accepts(puzzle, arg)?;

        match (self, arg) {
            (Self::PickUp, ActionArg::Entity(entity)) => {
                Ok(state.location_of(entity)? == state.location_of(puzzle.carrier())?)
            }
            (Self::PutDown, ActionArg::Entity(entity)) => {
                Ok(state.location_of(entity)? == Location::WithCarrier)
            }
            (Self::MoveCarrier, _) => Ok(true),
            (Self::TravelTo, ActionArg::Location(target)) => {
                let current = carrier_site(puzzle, state)?;
                Ok(current != target && puzzle.is_adjacent(current, target))
            }
            _ => Err(ActionError::MalformedAction { kind: self, arg }),
        }
    }

    /// Produce the state that results from applying an instance.
    ///
    /// Only meaningful when [`precondition`](Self::precondition) returned
    /// `true` for the same state and argument.
    pub fn effect(
        self,
        puzzle: &Puzzle,
        state: &WorldState,
        arg: ActionArg,
    ) -> Result<WorldState, ActionError> {
        self.ensure_accepts(puzzle, arg)?;

        let carrier = puzzle.carrier();
        let next = match (self, arg) {
            (Self::PickUp, ActionArg::Entity(entity)) => {
                state.move_entity(entity, Location::WithCarrier)?
            }
            (Self::PutDown, ActionArg::Entity(entity)) => {
                let site = carrier_site(puzzle, state)?;
                state.move_entity(entity, Location::At(site))?
            }
            (Self::MoveCarrier, _) => {
                let from = carrier_site(puzzle, state)?;
                let to = puzzle
                    .location_ids()
                    .find(|candidate| *candidate != from)
                    .ok_or(ActionError::NoOpposite { from })?;
                state.move_entity(carrier, Location::At(to))?
            }
            (Self::TravelTo, ActionArg::Location(target)) => {
                state.move_entity(carrier, Location::At(target))?
            }
            _ => return Err(ActionError::MalformedAction { kind: self, arg }),
        };
        Ok(next)
    }

    fn ensure_accepts(self, puzzle: &Puzzle, arg: ActionArg) -> Result<(), ActionError> {
        if self.accepts(puzzle, arg) {
            Ok(())
        } else {
            Err(ActionError::MalformedAction { kind: self, arg })
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared location the carrier currently occupies.
fn carrier_site(puzzle: &Puzzle, state: &WorldState) -> Result<LocationId, ActionError> {
    let carrier = puzzle.carrier();
    state
        .location_of(carrier)?
        .site()
        .ok_or(ActionError::CarrierDetached { carrier })
}

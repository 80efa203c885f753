//! Immutable search paths.

use crate::actions::Action;
use crate::core::WorldState;

/// An action sequence together with every state it visited.
///
/// Paths are values: [`extend`](Self::extend) returns a new path and leaves
/// the parent untouched, so paths in one frontier never share mutable state.
///
/// # Example
///
/// ```rust
/// use crossing::actions::Action;
/// use crossing::core::{EntityId, Location, LocationId, WorldState};
/// use crossing::search::Path;
///
/// let start = WorldState::uniform(2, Location::At(LocationId::new(0)));
/// let loaded = start.move_entity(EntityId::new(1), Location::WithCarrier).unwrap();
///
/// let root = Path::new(start.clone(), false);
/// let path = root.extend(Action::pick_up(EntityId::new(1)), loaded.clone(), false);
///
/// assert_eq!(root.len(), 0);
/// assert_eq!(path.len(), 1);
/// assert_eq!(path.current(), &loaded);
/// assert_eq!(path.states(), &[start, loaded]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    actions: Vec<Action>,
    states: Vec<WorldState>,
    complete: bool,
}

impl Path {
    /// Create an empty path seeded at `initial`.
    pub fn new(initial: WorldState, complete: bool) -> Self {
        Self {
            actions: Vec::new(),
            states: vec![initial],
            complete,
        }
    }

    /// Create a new path with one more action and its resulting state.
    ///
    /// `complete` tags whether `state` satisfies the goal test.
    pub fn extend(&self, action: Action, state: WorldState, complete: bool) -> Self {
        let mut actions = self.actions.clone();
        actions.push(action);
        let mut states = self.states.clone();
        states.push(state);
        Self {
            actions,
            states,
            complete,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Every visited state: the initial state followed by one per action.
    pub fn states(&self) -> &[WorldState] {
        &self.states
    }

    /// The state reached by the last action.
    pub fn current(&self) -> &WorldState {
        // states is never empty: new() seeds it and extend() only appends
        &self.states[self.states.len() - 1]
    }

    /// Number of actions taken.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn into_parts(self) -> (Vec<Action>, Vec<WorldState>) {
        (self.actions, self.states)
    }
}

//! Ordered catalog of the action kinds a puzzle allows.

use super::error::ActionError;
use super::kind::{Action, ActionKind};
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};

/// Registry of action kinds, in enumeration order.
///
/// The order of kinds, combined with the declared order of each kind's
/// domain, fixes the order in which the search explores continuations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionRegistry {
    kinds: Vec<ActionKind>,
}

impl ActionRegistry {
    /// Create a registry from kinds, dropping repeats but keeping first-seen order.
    pub fn new(kinds: impl IntoIterator<Item = ActionKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    /// The classic two-bank vocabulary: pick-up, put-down, move-carrier.
    pub fn standard() -> Self {
        Self::new([
            ActionKind::PickUp,
            ActionKind::PutDown,
            ActionKind::MoveCarrier,
        ])
    }

    pub fn kinds(&self) -> &[ActionKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Enumerate every concrete action instance.
    ///
    /// Cross product of registered kinds (registry order) with each kind's
    /// argument domain (declared order). Deterministic for a given puzzle.
    pub fn all_instances(&self, puzzle: &Puzzle) -> Vec<Action> {
        self.kinds
            .iter()
            .flat_map(|kind| {
                kind.domain(puzzle)
                    .into_iter()
                    .map(move |arg| Action::new(*kind, arg))
            })
            .collect()
    }

    /// Check that an action is registered and its argument is in the kind's domain.
    pub fn validate(&self, puzzle: &Puzzle, action: &Action) -> Result<(), ActionError> {
        if !self.contains(action.kind) {
            return Err(ActionError::Unregistered { kind: action.kind });
        }
        if !action.kind.accepts(puzzle, action.arg) {
            return Err(ActionError::MalformedAction {
                kind: action.kind,
                arg: action.arg,
            });
        }
        Ok(())
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

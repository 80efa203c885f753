//! Context provided to invariant checks.

use crate::core::{StateError, WorldState};
use crate::puzzle::Puzzle;

/// A candidate state together with everything an invariant may inspect.
///
/// `prior` holds the states already visited on the candidate's path, oldest
/// first, so history invariants can compare against them.
#[derive(Clone, Copy, Debug)]
pub struct CandidateContext<'a> {
    puzzle: &'a Puzzle,
    candidate: &'a WorldState,
    prior: &'a [WorldState],
}

impl<'a> CandidateContext<'a> {
    /// Build a context, checking that the candidate maps exactly the
    /// puzzle's entities.
    pub fn new(
        puzzle: &'a Puzzle,
        candidate: &'a WorldState,
        prior: &'a [WorldState],
    ) -> Result<Self, StateError> {
        if candidate.len() != puzzle.entity_count() {
            return Err(StateError::SizeMismatch {
                expected: puzzle.entity_count(),
                found: candidate.len(),
            });
        }
        Ok(Self {
            puzzle,
            candidate,
            prior,
        })
    }

    pub fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    pub fn candidate(&self) -> &'a WorldState {
        self.candidate
    }

    pub fn prior(&self) -> &'a [WorldState] {
        self.prior
    }
}

//! Search errors.

use crate::actions::ActionError;
use crate::core::StateError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a search.
///
/// The first four variants mean no plan was found; the rest are
/// configuration defects surfacing from preconditions or effects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search exhausted after {rounds} rounds: no solution exists")]
    SearchExhausted { rounds: usize },

    #[error("Round limit ({limit}) reached without a solution")]
    RoundLimitExceeded { limit: usize },

    #[error("Frontier grew to {size} paths (limit: {limit})")]
    FrontierLimitExceeded { limit: usize, size: usize },

    #[error("Search timed out after {elapsed:?} (limit: {timeout:?})")]
    TimeoutExceeded { timeout: Duration, elapsed: Duration },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl SearchError {
    /// Check if the search ended without a plan rather than on a defect.
    pub fn is_exhausted(&self) -> bool {
        matches!(
            self,
            Self::SearchExhausted { .. }
                | Self::RoundLimitExceeded { .. }
                | Self::FrontierLimitExceeded { .. }
                | Self::TimeoutExceeded { .. }
        )
    }
}

//! Invariant registry using Validation.

use crate::core::Location;
use crate::invariants::context::CandidateContext;
use crate::invariants::violations::InvariantViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom invariant predicates
pub type InvariantCheck = Arc<dyn Fn(&CandidateContext<'_>) -> bool + Send + Sync>;

/// Outcome of one or more invariant checks, accumulating every violation
pub type InvariantCheckResult = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Predicates evaluated on a candidate state alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateInvariant {
    /// No unsafe combination may share a declared location without the carrier.
    NoUnsafeCombinationUnsupervised,
    /// The carrier may not hold more entities than its capacity.
    CarryingCapacity,
}

/// Predicates evaluated on a candidate state against its path's history.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryInvariant {
    /// The candidate may not equal any state already visited on the path.
    NoRepeatedState,
}

impl StateInvariant {
    pub const ALL: [StateInvariant; 2] = [
        StateInvariant::NoUnsafeCombinationUnsupervised,
        StateInvariant::CarryingCapacity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NoUnsafeCombinationUnsupervised => "no-unsafe-combination-unsupervised",
            Self::CarryingCapacity => "carrying-capacity",
        }
    }

    /// Check the candidate, one validation per unsafe combination (pure).
    pub fn check(self, context: &CandidateContext<'_>) -> InvariantCheckResult {
        let puzzle = context.puzzle();
        let candidate = context.candidate();

        match self {
            Self::NoUnsafeCombinationUnsupervised => {
                let carrier_at = candidate.location_of(puzzle.carrier()).ok();
                let checks: Vec<InvariantCheckResult> = puzzle
                    .unsafe_combinations()
                    .iter()
                    .map(|members| match candidate.together(members) {
                        Ok(Some(Location::At(site))) if carrier_at != Some(Location::At(site)) => {
                            Validation::fail(InvariantViolation::UnsafeCombinationUnsupervised {
                                members: members.clone(),
                                location: site,
                            })
                        }
                        _ => Validation::success(()),
                    })
                    .collect();
                Validation::all_vec(checks).map(|_| ())
            }
            Self::CarryingCapacity => {
                let carried = candidate.carried().len();
                if carried > puzzle.capacity() {
                    Validation::fail(InvariantViolation::CapacityExceeded {
                        capacity: puzzle.capacity(),
                        carried,
                    })
                } else {
                    Validation::success(())
                }
            }
        }
    }

    /// Every violation of this invariant in the candidate (pure).
    pub fn violations(self, context: &CandidateContext<'_>) -> Vec<InvariantViolation> {
        into_violations(self.check(context))
    }
}

impl HistoryInvariant {
    pub const ALL: [HistoryInvariant; 1] = [HistoryInvariant::NoRepeatedState];

    pub fn name(self) -> &'static str {
        match self {
            Self::NoRepeatedState => "no-repeated-state",
        }
    }

    /// Check the candidate against the states already on its path (pure).
    pub fn check(self, context: &CandidateContext<'_>) -> InvariantCheckResult {
        match self {
            Self::NoRepeatedState => match context
                .prior()
                .iter()
                .position(|seen| seen == context.candidate())
            {
                Some(step) => Validation::fail(InvariantViolation::RepeatedState { step }),
                None => Validation::success(()),
            },
        }
    }

    /// Every violation of this invariant in the candidate (pure).
    pub fn violations(self, context: &CandidateContext<'_>) -> Vec<InvariantViolation> {
        into_violations(self.check(context))
    }
}

fn into_violations(result: InvariantCheckResult) -> Vec<InvariantViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// A named predicate registered alongside the built-in invariants.
#[derive(Clone)]
pub struct CustomInvariant {
    pub(crate) name: String,
    pub(crate) check: InvariantCheck,
}

impl CustomInvariant {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CustomInvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomInvariant")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Invariants every state on a candidate path must satisfy.
/// Uses Validation to accumulate ALL violations.
#[derive(Clone, Debug)]
pub struct InvariantRegistry {
    pub(crate) state: Vec<StateInvariant>,
    pub(crate) history: Vec<HistoryInvariant>,
    pub(crate) custom: Vec<CustomInvariant>,
}

impl InvariantRegistry {
    /// Every built-in invariant, no custom checks.
    pub fn standard() -> Self {
        Self {
            state: StateInvariant::ALL.to_vec(),
            history: HistoryInvariant::ALL.to_vec(),
            custom: Vec::new(),
        }
    }

    pub fn state_invariants(&self) -> &[StateInvariant] {
        &self.state
    }

    pub fn history_invariants(&self) -> &[HistoryInvariant] {
        &self.history
    }

    pub fn custom_invariants(&self) -> &[CustomInvariant] {
        &self.custom
    }

    /// Enforce all invariants, accumulating ALL violations.
    /// Returns Validation::Success(()) if every invariant holds.
    /// Returns Validation::Failure with ALL violations otherwise.
    pub fn enforce(&self, context: &CandidateContext<'_>) -> InvariantCheckResult {
        let mut checks: Vec<InvariantCheckResult> = Vec::new();

        for invariant in &self.state {
            checks.push(invariant.check(context));
        }

        for invariant in &self.history {
            checks.push(invariant.check(context));
        }

        for custom in &self.custom {
            checks.push(if (custom.check)(context) {
                Validation::success(())
            } else {
                Validation::fail(InvariantViolation::CustomCheckFailed {
                    name: custom.name.clone(),
                })
            });
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check if the candidate satisfies every invariant.
    pub fn accepts(&self, context: &CandidateContext<'_>) -> bool {
        self.enforce(context).is_success()
    }
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

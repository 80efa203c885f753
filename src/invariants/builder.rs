//! Builder API for assembling invariant registries.

use crate::invariants::context::CandidateContext;
use crate::invariants::rules::{
    CustomInvariant, HistoryInvariant, InvariantRegistry, StateInvariant,
};
use std::sync::Arc;

/// Builder for creating invariant registries
pub struct InvariantBuilder {
    state: Vec<StateInvariant>,
    history: Vec<HistoryInvariant>,
    custom: Vec<CustomInvariant>,
}

impl InvariantBuilder {
    /// Start from an empty registry
    pub fn new() -> Self {
        Self {
            state: Vec::new(),
            history: Vec::new(),
            custom: Vec::new(),
        }
    }

    /// Start from every built-in invariant
    pub fn standard() -> Self {
        Self {
            state: StateInvariant::ALL.to_vec(),
            history: HistoryInvariant::ALL.to_vec(),
            custom: Vec::new(),
        }
    }

    /// Register a state invariant
    pub fn state(mut self, invariant: StateInvariant) -> Self {
        if !self.state.contains(&invariant) {
            self.state.push(invariant);
        }
        self
    }

    /// Register a history invariant
    pub fn history(mut self, invariant: HistoryInvariant) -> Self {
        if !self.history.contains(&invariant) {
            self.history.push(invariant);
        }
        self
    }

    /// Add a named predicate; the candidate is rejected when it returns false
    pub fn require_pred<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&CandidateContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.custom.push(CustomInvariant {
            name: name.into(),
            check: Arc::new(predicate),
        });
        self
    }

    /// Build the registry
    pub fn build(self) -> InvariantRegistry {
        InvariantRegistry {
            state: self.state,
            history: self.history,
            custom: self.custom,
        }
    }
}

impl Default for InvariantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

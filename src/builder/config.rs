//! Declarative, serializable puzzle configuration.

use crate::actions::ActionKind;
use crate::builder::error::BuildError;
use crate::builder::puzzle::PuzzleBuilder;
use crate::core::Location;
use crate::invariants::{HistoryInvariant, InvariantBuilder, StateInvariant};
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable form of a puzzle.
/// Does NOT include custom invariant predicates (not serializable).
///
/// Omitted optional fields take the builder's defaults. `initial` maps
/// entity names to location names; unlisted entities start at the origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    pub carrier: String,
    pub entities: Vec<String>,
    pub locations: Vec<String>,
    pub origin: String,
    pub destination: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unsafe_combinations: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<(String, String)>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub initial: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionKind>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_invariants: Option<Vec<StateInvariant>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_invariants: Option<Vec<HistoryInvariant>>,
}

impl PuzzleConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Validate the configuration through [`PuzzleBuilder`].
    ///
    /// The carrier, origin and destination must appear in the declared
    /// `entities` and `locations` lists.
    pub fn build(&self) -> Result<Puzzle, BuildError> {
        if !self.entities.contains(&self.carrier) {
            return Err(BuildError::UnknownEntity {
                name: self.carrier.clone(),
            });
        }
        for role in [&self.origin, &self.destination] {
            if !self.locations.contains(role) {
                return Err(BuildError::UnknownLocation { name: role.clone() });
            }
        }

        let mut builder = PuzzleBuilder::new()
            .entities(self.entities.iter().cloned())
            .carrier(self.carrier.clone());

        for location in &self.locations {
            builder = builder.location(location.clone());
        }
        builder = builder
            .origin(self.origin.clone())
            .destination(self.destination.clone());

        if let Some(capacity) = self.capacity {
            builder = builder.capacity(capacity);
        }
        for members in &self.unsafe_combinations {
            builder = builder.unsafe_combination(members.iter().cloned());
        }
        for (a, b) in &self.routes {
            builder = builder.route(a.clone(), b.clone());
        }
        for (entity, location) in &self.initial {
            builder = builder.place(entity.clone(), location.clone());
        }
        if let Some(actions) = &self.actions {
            builder = builder.actions(actions.iter().copied());
        }

        if self.state_invariants.is_some() || self.history_invariants.is_some() {
            let mut invariants = InvariantBuilder::new();
            let state = self
                .state_invariants
                .clone()
                .unwrap_or_else(|| StateInvariant::ALL.to_vec());
            let history = self
                .history_invariants
                .clone()
                .unwrap_or_else(|| HistoryInvariant::ALL.to_vec());
            for invariant in state {
                invariants = invariants.state(invariant);
            }
            for invariant in history {
                invariants = invariants.history(invariant);
            }
            builder = builder.invariants(invariants.build());
        }

        builder.build()
    }
}

impl From<&Puzzle> for PuzzleConfig {
    fn from(puzzle: &Puzzle) -> Self {
        let entity = |id| puzzle.entity_name(id).unwrap_or_default().to_string();
        let location = |id| puzzle.location_name(id).unwrap_or_default().to_string();

        let initial = puzzle
            .initial_state()
            .iter()
            .filter(|(_, at)| *at != Location::At(puzzle.origin()))
            .map(|(id, at)| (entity(id), puzzle.describe_location(at)))
            .collect();

        Self {
            carrier: entity(puzzle.carrier()),
            entities: puzzle.entities().map(entity).collect(),
            locations: puzzle.location_ids().map(location).collect(),
            origin: location(puzzle.origin()),
            destination: location(puzzle.destination()),
            capacity: Some(puzzle.capacity()),
            unsafe_combinations: puzzle
                .unsafe_combinations()
                .iter()
                .map(|members| members.iter().copied().map(entity).collect())
                .collect(),
            routes: puzzle
                .routes()
                .iter()
                .map(|&(a, b)| (location(a), location(b)))
                .collect(),
            initial,
            actions: Some(puzzle.actions().kinds().to_vec()),
            state_invariants: Some(puzzle.invariants().state_invariants().to_vec()),
            history_invariants: Some(puzzle.invariants().history_invariants().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FERRY: &str = r#"{
        "carrier": "farmer",
        "entities": ["farmer", "fox", "goose", "grain"],
        "locations": ["near", "far"],
        "origin": "near",
        "destination": "far",
        "unsafe_combinations": [["fox", "goose"], ["goose", "grain"]]
    }"#;

    #[test]
    fn config_parses_with_defaults() {
        let config = PuzzleConfig::from_json(FERRY).unwrap();
        assert_eq!(config.capacity, None);
        assert!(config.actions.is_none());

        let puzzle = config.build().unwrap();
        assert_eq!(puzzle.entity_count(), 4);
        assert_eq!(puzzle.capacity(), 1);
        assert_eq!(puzzle.unsafe_combinations().len(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = PuzzleConfig::from_json(r#"{"carrier": "farmer", "boat": 2}"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn action_and_invariant_names_use_kebab_case() {
        let json = r#"{
            "carrier": "farmer",
            "entities": ["farmer", "goose"],
            "locations": ["near", "far"],
            "origin": "near",
            "destination": "far",
            "actions": ["pick-up", "put-down", "move-carrier"],
            "state_invariants": ["carrying-capacity"],
            "history_invariants": []
        }"#;

        let puzzle = Puzzle::from_json(json).unwrap();
        assert_eq!(
            puzzle.invariants().state_invariants(),
            &[StateInvariant::CarryingCapacity]
        );
        assert!(puzzle.invariants().history_invariants().is_empty());
    }

    #[test]
    fn config_reflects_a_built_puzzle() {
        let puzzle = PuzzleConfig::from_json(FERRY).unwrap().build().unwrap();
        let config = PuzzleConfig::from(&puzzle);

        let rebuilt = config.build().unwrap();
        assert_eq!(PuzzleConfig::from(&rebuilt), config);
        assert_eq!(rebuilt.initial_state(), puzzle.initial_state());
        assert_eq!(rebuilt.actions(), puzzle.actions());
    }

    #[test]
    fn undeclared_carrier_is_rejected() {
        let json = FERRY.replace(r#""carrier": "farmer""#, r#""carrier": "boatman""#);
        assert_eq!(
            Puzzle::from_json(&json).unwrap_err(),
            BuildError::UnknownEntity {
                name: "boatman".to_string()
            }
        );
    }

    #[test]
    fn undeclared_origin_is_rejected() {
        let json = FERRY.replace(r#""origin": "near""#, r#""origin": "dock""#);
        assert_eq!(
            Puzzle::from_json(&json).unwrap_err(),
            BuildError::UnknownLocation {
                name: "dock".to_string()
            }
        );
    }

    #[test]
    fn undeclared_destination_is_rejected() {
        let json = FERRY.replace(r#""destination": "far""#, r#""destination": "shore""#);
        assert_eq!(
            Puzzle::from_json(&json).unwrap_err(),
            BuildError::UnknownLocation {
                name: "shore".to_string()
            }
        );
    }

    #[test]
    fn unknown_placement_is_reported() {
        let mut config = PuzzleConfig::from_json(FERRY).unwrap();
        config
            .initial
            .insert("wolf".to_string(), "far".to_string());
        assert_eq!(
            config.build().unwrap_err(),
            BuildError::UnknownEntity {
                name: "wolf".to_string()
            }
        );
    }
}

//! Search results and run statistics.

use crate::actions::Action;
use crate::core::WorldState;
use crate::puzzle::Puzzle;
use crate::search::path::Path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Counters collected over one search run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Identifies the run in logs and reports
    pub run_id: Uuid,

    /// When the search started
    pub started_at: DateTime<Utc>,

    /// Expansion rounds completed
    pub rounds: usize,

    /// Paths taken from a frontier and expanded
    pub paths_expanded: usize,

    /// Action instances considered across all paths
    pub candidates: usize,

    /// Instances whose precondition did not hold
    pub precondition_rejections: usize,

    /// Resulting states rejected by at least one invariant
    pub invariant_rejections: usize,

    /// Largest frontier seen
    pub peak_frontier: usize,

    /// Wall-clock time from start to result
    pub elapsed: Duration,
}

impl SearchStats {
    pub(crate) fn start(run_id: Uuid) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            rounds: 0,
            paths_expanded: 0,
            candidates: 0,
            precondition_rejections: 0,
            invariant_rejections: 0,
            peak_frontier: 1,
            elapsed: Duration::ZERO,
        }
    }

    /// Time elapsed since the search started.
    pub fn elapsed_since_start(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub(crate) fn finish(mut self) -> Self {
        self.elapsed = self.elapsed_since_start();
        self
    }
}

/// A plan that reaches the goal, with the states it visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    plan: Vec<Action>,
    states: Vec<WorldState>,
    stats: SearchStats,
}

/// JSON view of a solution with names resolved.
#[derive(Serialize)]
struct SolutionReport<'a> {
    run_id: Uuid,
    steps: Vec<String>,
    crossings: usize,
    final_state: String,
    stats: &'a SearchStats,
}

impl Solution {
    pub(crate) fn new(path: Path, stats: SearchStats) -> Self {
        let (plan, states) = path.into_parts();
        Self {
            plan,
            states,
            stats,
        }
    }

    /// The actions, in order.
    pub fn plan(&self) -> &[Action] {
        &self.plan
    }

    /// The initial state followed by the state after each action.
    pub fn states(&self) -> &[WorldState] {
        &self.states
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Number of actions that move the carrier.
    pub fn crossings(&self) -> usize {
        self.plan.iter().filter(|action| action.is_crossing()).count()
    }

    /// The goal state the plan ends in.
    pub fn final_state(&self) -> &WorldState {
        &self.states[self.states.len() - 1]
    }

    pub fn into_plan(self) -> Vec<Action> {
        self.plan
    }

    /// Numbered, named steps: `1. pick-up(goose)`.
    pub fn steps(&self, puzzle: &Puzzle) -> Vec<String> {
        self.plan
            .iter()
            .enumerate()
            .map(|(index, action)| format!("{}. {}", index + 1, puzzle.describe(action)))
            .collect()
    }

    /// Render the plan one step per line, each followed by the state it reaches.
    pub fn render(&self, puzzle: &Puzzle) -> String {
        let mut lines = vec![format!("start: {}", puzzle.describe_state(&self.states[0]))];
        for (step, state) in self.steps(puzzle).into_iter().zip(self.states.iter().skip(1)) {
            lines.push(format!("{step} -> {}", puzzle.describe_state(state)));
        }
        lines.join("\n")
    }

    /// Serialize a named report of the solution as pretty-printed JSON.
    pub fn to_json(&self, puzzle: &Puzzle) -> Result<String, serde_json::Error> {
        let report = SolutionReport {
            run_id: self.stats.run_id,
            steps: self.plan.iter().map(|action| puzzle.describe(action)).collect(),
            crossings: self.crossings(),
            final_state: puzzle.describe_state(self.final_state()),
            stats: &self.stats,
        };
        serde_json::to_string_pretty(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PuzzleBuilder;

    fn single_goose() -> (Puzzle, Solution) {
        let puzzle = PuzzleBuilder::new()
            .carrier("farmer")
            .entity("goose")
            .origin("near")
            .destination("far")
            .build()
            .unwrap();
        let goose = puzzle.entity_id("goose").unwrap();
        let plan = vec![
            Action::pick_up(goose),
            Action::move_carrier(),
            Action::put_down(goose),
        ];

        let mut path = Path::new(puzzle.initial_state().clone(), false);
        for action in plan {
            let next = puzzle.apply(path.current(), &action).unwrap();
            let complete = puzzle.is_complete(&next);
            path = path.extend(action, next, complete);
        }
        let solution = Solution::new(path, SearchStats::start(Uuid::new_v4()).finish());
        (puzzle, solution)
    }

    #[test]
    fn crossings_count_carrier_moves_only() {
        let (puzzle, solution) = single_goose();
        assert_eq!(solution.len(), 3);
        assert_eq!(solution.crossings(), 1);
        assert!(puzzle.is_complete(solution.final_state()));
    }

    #[test]
    fn steps_are_numbered_and_named() {
        let (puzzle, solution) = single_goose();
        assert_eq!(
            solution.steps(&puzzle),
            vec![
                "1. pick-up(goose)".to_string(),
                "2. move-carrier()".to_string(),
                "3. put-down(goose)".to_string(),
            ]
        );

        let rendered = solution.render(&puzzle);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.ends_with("far: farmer, goose | with-carrier: -"));
    }

    #[test]
    fn json_report_names_steps() {
        let (puzzle, solution) = single_goose();
        let json = solution.to_json(&puzzle).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["crossings"], 1);
        assert_eq!(value["steps"][0], "pick-up(goose)");
        assert_eq!(value["run_id"], solution.stats().run_id.to_string());
    }

    #[test]
    fn elapsed_is_never_negative() {
        let stats = SearchStats::start(Uuid::new_v4());
        assert!(stats.elapsed_since_start() < Duration::from_secs(60));
    }
}

//! Breadth-first search over frontier rounds.

use crate::actions::Action;
use crate::invariants::{CandidateContext, InvariantViolation};
use crate::puzzle::Puzzle;
use crate::search::error::SearchError;
use crate::search::observer::{NoopObserver, SearchObserver};
use crate::search::path::Path;
use crate::search::solution::{SearchStats, Solution};
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, info, info_span, trace};
use uuid::Uuid;

/// Optional limits on a search. The default is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Maximum number of expansion rounds
    pub max_rounds: Option<usize>,

    /// Maximum number of paths in one frontier
    pub max_frontier: Option<usize>,

    /// Maximum wall-clock time, checked between rounds
    pub timeout: Option<Duration>,
}

impl SearchPolicy {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_max_frontier(mut self, paths: usize) -> Self {
        self.max_frontier = Some(paths);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Runs the search for one puzzle.
///
/// # Example
///
/// ```rust
/// use crossing::puzzle;
/// use crossing::search::Solver;
///
/// let puzzle = puzzle! {
///     carrier: "farmer",
///     entities: ["goose"],
///     origin: "near",
///     destination: "far",
/// }
/// .unwrap();
///
/// let solution = Solver::new(&puzzle).solve().unwrap();
/// assert_eq!(solution.len(), 3);
/// assert!(puzzle.is_complete(solution.final_state()));
/// ```
pub struct Solver<'p, O = NoopObserver> {
    puzzle: &'p Puzzle,
    policy: SearchPolicy,
    observer: O,
}

impl<'p> Solver<'p> {
    pub fn new(puzzle: &'p Puzzle) -> Self {
        Self {
            puzzle,
            policy: SearchPolicy::default(),
            observer: NoopObserver,
        }
    }
}

impl<'p, O: SearchObserver> Solver<'p, O> {
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the observer.
    pub fn with_observer<P: SearchObserver>(self, observer: P) -> Solver<'p, P> {
        Solver {
            puzzle: self.puzzle,
            policy: self.policy,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Search for the first complete path.
    ///
    /// Rounds expand every path of the frontier with every action instance
    /// in registry order. When a round produces complete paths the first in
    /// production order wins; when it produces no paths at all the search
    /// fails with [`SearchError::SearchExhausted`].
    pub fn solve(&mut self) -> Result<Solution, SearchError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("solve", %run_id);
        let _enter = span.enter();

        let puzzle = self.puzzle;
        let mut stats = SearchStats::start(run_id);

        let initial = puzzle.initial_state().clone();
        let root_complete = puzzle.is_complete(&initial);
        let root = Path::new(initial, root_complete);
        if root.is_complete() {
            info!("Initial state already satisfies the goal");
            return Ok(Solution::new(root, stats.finish()));
        }

        let mut frontier = vec![root];
        loop {
            self.check_budget(&stats)?;

            frontier = self.expand(&frontier, &mut stats)?;
            stats.rounds += 1;
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
            self.observer.on_round(stats.rounds, frontier.len());
            debug!(
                round = stats.rounds,
                frontier = frontier.len(),
                candidates = stats.candidates,
                "Expansion round complete"
            );

            if let Some(index) = frontier.iter().position(Path::is_complete) {
                let path = frontier.swap_remove(index);
                let stats = stats.finish();
                info!(
                    actions = path.len(),
                    rounds = stats.rounds,
                    elapsed = ?stats.elapsed,
                    "Solution found"
                );
                return Ok(Solution::new(path, stats));
            }

            if frontier.is_empty() {
                info!(rounds = stats.rounds, "Search exhausted without a solution");
                return Err(SearchError::SearchExhausted {
                    rounds: stats.rounds,
                });
            }

            if let Some(limit) = self.policy.max_frontier {
                if frontier.len() > limit {
                    return Err(SearchError::FrontierLimitExceeded {
                        limit,
                        size: frontier.len(),
                    });
                }
            }
        }
    }

    fn check_budget(&self, stats: &SearchStats) -> Result<(), SearchError> {
        if let Some(limit) = self.policy.max_rounds {
            if stats.rounds >= limit {
                return Err(SearchError::RoundLimitExceeded { limit });
            }
        }
        if let Some(timeout) = self.policy.timeout {
            let elapsed = stats.elapsed_since_start();
            if elapsed > timeout {
                return Err(SearchError::TimeoutExceeded { timeout, elapsed });
            }
        }
        Ok(())
    }

    /// One expansion round: every path times every action instance.
    fn expand(
        &mut self,
        frontier: &[Path],
        stats: &mut SearchStats,
    ) -> Result<Vec<Path>, SearchError> {
        let puzzle = self.puzzle;
        let instances = puzzle.actions().all_instances(puzzle);
        let mut next = Vec::new();

        for path in frontier {
            stats.paths_expanded += 1;

            for action in &instances {
                stats.candidates += 1;

                let holds = action.kind.precondition(puzzle, path.current(), action.arg)?;
                self.observer.on_precondition(path, action, holds);
                if !holds {
                    stats.precondition_rejections += 1;
                    continue;
                }

                let candidate = action.kind.effect(puzzle, path.current(), action.arg)?;
                self.observer.on_effect(path, action, &candidate);

                let context = CandidateContext::new(puzzle, &candidate, path.states())?;
                match puzzle.invariants().enforce(&context) {
                    Validation::Success(_) => {
                        let complete = puzzle.is_complete(&candidate);
                        let child = path.extend(*action, candidate, complete);
                        self.observer.on_accepted(&child);
                        next.push(child);
                    }
                    Validation::Failure(errors) => {
                        stats.invariant_rejections += 1;
                        let violations: Vec<InvariantViolation> = errors.iter().cloned().collect();
                        trace_rejection(puzzle, action, &violations);
                        self.observer
                            .on_rejected(path, action, &candidate, &violations);
                    }
                }
            }
        }

        Ok(next)
    }
}

fn trace_rejection(puzzle: &Puzzle, action: &Action, violations: &[InvariantViolation]) {
    trace!(
        action = %puzzle.describe(action),
        violations = violations.len(),
        first = %violations.first().map(ToString::to_string).unwrap_or_default(),
        "Candidate rejected"
    );
}

/// Solve with the default unbounded policy.
pub fn solve(puzzle: &Puzzle) -> Result<Solution, SearchError> {
    Solver::new(puzzle).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PuzzleBuilder;
    use crate::core::Location;
    use crate::invariants::InvariantBuilder;

    fn ferry() -> Puzzle {
        PuzzleBuilder::new()
            .carrier("farmer")
            .entities(["fox", "goose", "grain"])
            .origin("near")
            .destination("far")
            .unsafe_combination(["fox", "goose"])
            .unsafe_combination(["goose", "grain"])
            .build()
            .unwrap()
    }

    #[derive(Default)]
    struct Counting {
        rounds: Vec<(usize, usize)>,
        rejected: usize,
    }

    impl SearchObserver for Counting {
        fn on_rejected(
            &mut self,
            _path: &Path,
            _action: &Action,
            _candidate: &crate::core::WorldState,
            _violations: &[InvariantViolation],
        ) {
            self.rejected += 1;
        }

        fn on_round(&mut self, round: usize, frontier: usize) {
            self.rounds.push((round, frontier));
        }
    }

    #[test]
    fn solves_reference_puzzle() {
        let puzzle = ferry();
        let solution = solve(&puzzle).unwrap();

        assert_eq!(solution.len(), 17);
        assert_eq!(solution.crossings(), 7);
        assert!(puzzle.is_complete(solution.final_state()));
        assert_eq!(solution.stats().rounds, 17);
    }

    #[test]
    fn initial_goal_returns_empty_plan() {
        let puzzle = PuzzleBuilder::new()
            .carrier("farmer")
            .entity("goose")
            .origin("near")
            .destination("far")
            .place("farmer", "far")
            .place("goose", "far")
            .build()
            .unwrap();

        let solution = solve(&puzzle).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.stats().rounds, 0);
        assert_eq!(
            solution.final_state().location_of(puzzle.carrier()).unwrap(),
            Location::At(puzzle.destination())
        );
    }

    #[test]
    fn observer_sees_every_round_and_rejection() {
        let puzzle = ferry();
        let mut solver = Solver::new(&puzzle).with_observer(Counting::default());
        let solution = solver.solve().unwrap();
        let observer = solver.into_observer();

        assert_eq!(observer.rounds.len(), solution.stats().rounds);
        assert_eq!(observer.rejected, solution.stats().invariant_rejections);
        assert!(observer.rounds.iter().all(|&(_, frontier)| frontier > 0));
    }

    #[test]
    fn round_limit_stops_search() {
        let puzzle = ferry();
        let result = Solver::new(&puzzle)
            .with_policy(SearchPolicy::unbounded().with_max_rounds(3))
            .solve();

        assert_eq!(result.unwrap_err(), SearchError::RoundLimitExceeded { limit: 3 });
    }

    #[test]
    fn frontier_limit_stops_search() {
        let puzzle = PuzzleBuilder::new()
            .carrier("farmer")
            .entities(["a", "b", "c"])
            .origin("near")
            .destination("far")
            .capacity(3)
            .build()
            .unwrap();

        let result = Solver::new(&puzzle)
            .with_policy(SearchPolicy::unbounded().with_max_frontier(1))
            .solve();

        let error = result.unwrap_err();
        assert!(matches!(
            error,
            SearchError::FrontierLimitExceeded { limit: 1, .. }
        ));
        assert!(error.is_exhausted());
    }

    #[test]
    fn timeout_stops_search_between_rounds() {
        let slow = InvariantBuilder::standard()
            .require_pred("slow", |_| {
                std::thread::sleep(Duration::from_millis(2));
                true
            })
            .build();
        let puzzle = PuzzleBuilder::new()
            .carrier("farmer")
            .entities(["fox", "goose", "grain"])
            .origin("near")
            .destination("far")
            .unsafe_combination(["fox", "goose"])
            .unsafe_combination(["goose", "grain"])
            .invariants(slow)
            .build()
            .unwrap();

        let result = Solver::new(&puzzle)
            .with_policy(SearchPolicy::unbounded().with_timeout(Duration::from_millis(1)))
            .solve();

        match result {
            Err(SearchError::TimeoutExceeded { timeout, elapsed }) => {
                assert_eq!(timeout, Duration::from_millis(1));
                assert!(elapsed > timeout);
            }
            other => panic!("Expected timeout, got {other:?}"),
        }
    }
}

//! Hooks into the search loop.

use crate::actions::Action;
use crate::core::WorldState;
use crate::invariants::InvariantViolation;
use crate::search::path::Path;

/// Receives every decision the driver makes.
///
/// All methods default to no-ops, so implementors override only what they
/// need. Observers are read-only with respect to the search: they cannot
/// change which paths survive.
pub trait SearchObserver {
    /// A precondition was evaluated for `action` on `path`'s current state.
    fn on_precondition(&mut self, _path: &Path, _action: &Action, _holds: bool) {}

    /// An effect was applied, producing `candidate`.
    fn on_effect(&mut self, _path: &Path, _action: &Action, _candidate: &WorldState) {}

    /// `candidate` failed at least one invariant.
    fn on_rejected(
        &mut self,
        _path: &Path,
        _action: &Action,
        _candidate: &WorldState,
        _violations: &[InvariantViolation],
    ) {
    }

    /// A new path joined the next frontier.
    fn on_accepted(&mut self, _path: &Path) {}

    /// An expansion round finished with `frontier` paths.
    fn on_round(&mut self, _round: usize, _frontier: usize) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_precondition(&mut self, path: &Path, action: &Action, holds: bool) {
        (**self).on_precondition(path, action, holds)
    }

    fn on_effect(&mut self, path: &Path, action: &Action, candidate: &WorldState) {
        (**self).on_effect(path, action, candidate)
    }

    fn on_rejected(
        &mut self,
        path: &Path,
        action: &Action,
        candidate: &WorldState,
        violations: &[InvariantViolation],
    ) {
        (**self).on_rejected(path, action, candidate, violations)
    }

    fn on_accepted(&mut self, path: &Path) {
        (**self).on_accepted(path)
    }

    fn on_round(&mut self, round: usize, frontier: usize) {
        (**self).on_round(round, frontier)
    }
}

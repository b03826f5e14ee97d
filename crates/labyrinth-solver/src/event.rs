use labyrinth_core::Coordinate;

use crate::Path;

/// A single observable step of the breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolverEvent {
    /// A cell was reached for the first time and queued for expansion.
    ///
    /// The start cell is the first cell discovered.
    CellDiscovered {
        /// The discovered cell.
        coord: Coordinate,
    },
    /// The target was dequeued; this is the final event of the search.
    PathFound {
        /// The shortest path from start to target.
        path: Path,
    },
    /// Every reachable cell was expanded without finding the target; this is
    /// the final event of the search.
    PathUnreachable,
}

/// Receives solver events as they happen.
///
/// Closures taking `&SolverEvent` implement this trait.
pub trait SolverObserver {
    /// Called once for every event, in order.
    fn on_event(&mut self, event: &SolverEvent);
}

impl<F> SolverObserver for F
where
    F: FnMut(&SolverEvent),
{
    fn on_event(&mut self, event: &SolverEvent) {
        self(event);
    }
}

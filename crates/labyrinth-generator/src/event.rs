use labyrinth_core::{Coordinate, Direction};

/// A single observable step of maze generation.
///
/// Events are produced strictly in order, one per
/// [`GenerationSteps::step`](crate::GenerationSteps::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GenerationEvent {
    /// A cell was reached for the first time.
    CellVisited {
        /// The visited cell.
        coord: Coordinate,
        /// Zero-based visiting order.
        order: usize,
    },
    /// The wall between two adjacent cells was removed.
    WallOpened {
        /// The cell the walk came from.
        from: Coordinate,
        /// The unvisited cell the walk moves to.
        to: Coordinate,
        /// The side of `from` that was opened.
        direction: Direction,
    },
    /// A cell without unvisited neighbors was popped off the stack.
    Backtracked {
        /// The cell that was left.
        coord: Coordinate,
    },
}

/// Receives generation events as they happen.
///
/// Closures taking `&GenerationEvent` implement this trait.
pub trait GenerationObserver {
    /// Called once for every event, in order.
    fn on_event(&mut self, event: &GenerationEvent);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationEvent),
{
    fn on_event(&mut self, event: &GenerationEvent) {
        self(event);
    }
}

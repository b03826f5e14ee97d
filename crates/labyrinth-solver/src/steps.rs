use std::collections::{HashMap, VecDeque};

use labyrinth_core::{Coordinate, CoordinateSet, Grid};

use crate::{Path, SolverError, SolverEvent, SolverObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchState {
    Searching,
    Found(Path),
    Unreachable,
}

/// A resumable breadth-first search over a borrowed [`Grid`].
///
/// Each call to [`step`](Self::step) returns one [`SolverEvent`]. The grid is
/// only read; all traversal bookkeeping (queue, visited-set and predecessor
/// links) lives in this value and is dropped with it.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Direction, Grid};
/// use labyrinth_solver::{SolveSteps, SolverEvent};
///
/// let mut grid = Grid::new(2, 1)?;
/// grid.open_wall(Coordinate::new(0, 0), Direction::Right)?;
///
/// let mut steps = SolveSteps::new(&grid, Coordinate::new(0, 0), Coordinate::new(1, 0))?;
/// let mut discovered = 0;
/// while let Some(event) = steps.step()? {
///     if event.is_cell_discovered() {
///         discovered += 1;
///     }
/// }
/// assert_eq!(discovered, 2);
/// assert_eq!(steps.path().map(|p| p.edge_count()), Some(1));
/// # Ok::<(), labyrinth_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolveSteps<'a> {
    grid: &'a Grid,
    start: Coordinate,
    target: Coordinate,
    queue: VecDeque<Coordinate>,
    visited: CoordinateSet,
    predecessors: HashMap<Coordinate, Coordinate>,
    pending: VecDeque<SolverEvent>,
    state: SearchState,
}

impl<'a> SolveSteps<'a> {
    /// Prepares a search from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if either coordinate is outside the grid.
    pub fn new(grid: &'a Grid, start: Coordinate, target: Coordinate) -> Result<Self, SolverError> {
        grid.check_bounds(start)?;
        grid.check_bounds(target)?;

        let mut visited = CoordinateSet::for_grid(grid);
        visited.insert(start);
        Ok(Self {
            grid,
            start,
            target,
            queue: VecDeque::from([start]),
            visited,
            predecessors: HashMap::new(),
            pending: VecDeque::from([SolverEvent::CellDiscovered { coord: start }]),
            state: SearchState::Searching,
        })
    }

    /// Returns the coordinate the search started from.
    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Returns the coordinate being searched for.
    #[must_use]
    pub fn target(&self) -> Coordinate {
        self.target
    }

    /// Returns `true` once the search has produced its final event.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state != SearchState::Searching && self.pending.is_empty()
    }

    /// Returns the number of cells discovered so far.
    #[must_use]
    pub fn discovered_cells(&self) -> usize {
        self.visited.len()
    }

    /// Returns the path, once it has been found.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.state {
            SearchState::Found(path) => Some(path),
            SearchState::Searching | SearchState::Unreachable => None,
        }
    }

    /// Advances the search by one event.
    ///
    /// Discoveries are reported in the order cells are queued: the start cell
    /// first, then the unvisited neighbors behind each open wall of every
    /// dequeued cell, in [`Direction::ALL`](labyrinth_core::Direction::ALL)
    /// order. The search ends with either [`SolverEvent::PathFound`], as soon
    /// as the target is dequeued, or [`SolverEvent::PathUnreachable`], once
    /// the queue runs dry.
    ///
    /// Returns `Ok(None)` after the final event.
    ///
    /// # Errors
    ///
    /// Propagates grid lookup errors. They cannot occur for a search created
    /// through [`new`](Self::new) over a consistent grid.
    pub fn step(&mut self) -> Result<Option<SolverEvent>, SolverError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            if self.state != SearchState::Searching {
                return Ok(None);
            }

            let Some(current) = self.queue.pop_front() else {
                log::debug!(
                    "{} unreachable from {} after discovering {} cells",
                    self.target,
                    self.start,
                    self.visited.len()
                );
                self.state = SearchState::Unreachable;
                return Ok(Some(SolverEvent::PathUnreachable));
            };

            if current == self.target {
                let path = self.reconstruct();
                log::debug!(
                    "found {}-step path from {} to {} after discovering {} cells",
                    path.edge_count(),
                    self.start,
                    self.target,
                    self.visited.len()
                );
                self.state = SearchState::Found(path.clone());
                return Ok(Some(SolverEvent::PathFound { path }));
            }

            self.expand(current)?;
        }
    }

    fn expand(&mut self, current: Coordinate) -> Result<(), SolverError> {
        for direction in self.grid.cell(current)?.openings().directions() {
            let Some(next) = current.offset(direction) else {
                continue;
            };
            if !self.grid.contains(next) || !self.visited.insert(next) {
                continue;
            }
            self.predecessors.insert(next, current);
            self.queue.push_back(next);
            log::trace!("discovered {next} from {current}");
            self.pending
                .push_back(SolverEvent::CellDiscovered { coord: next });
        }
        Ok(())
    }

    fn reconstruct(&self) -> Path {
        let mut coords = vec![self.target];
        let mut current = self.target;
        while let Some(&previous) = self.predecessors.get(&current) {
            coords.push(previous);
            current = previous;
        }
        debug_assert_eq!(current, self.start);
        Path::from_reversed(coords)
    }

    /// Runs the search to completion, reporting every event to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnreachableTarget`] if the target cannot be
    /// reached, and propagates errors from [`step`](Self::step).
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<Path, SolverError>
    where
        O: SolverObserver + ?Sized,
    {
        while let Some(event) = self.step()? {
            observer.on_event(&event);
        }
        let (start, target) = (self.start, self.target);
        self.path()
            .cloned()
            .ok_or(SolverError::UnreachableTarget { start, target })
    }

    /// Runs the search to completion without observing events.
    ///
    /// # Errors
    ///
    /// See [`run_with`](Self::run_with).
    pub fn run(&mut self) -> Result<Path, SolverError> {
        self.run_with(&mut |_: &SolverEvent| {})
    }
}

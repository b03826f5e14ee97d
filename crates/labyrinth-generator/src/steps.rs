use labyrinth_core::{Coordinate, CoordinateSet, Grid, GridError};
use rand::Rng;

use crate::{GenerationEvent, GenerationObserver};

/// A resumable randomized backtracking run over a borrowed [`Grid`].
///
/// Each call to [`step`](Self::step) advances the algorithm by exactly one
/// event and returns it, so a caller can interleave generation with rendering
/// or stop at any point. The run holds no resources besides the borrow, so
/// abandoning it midway is fine; the grid is left partially carved.
///
/// The loop is driven by the number of visited cells, not by the stack: the
/// run is finished as soon as every cell has been visited, even if cells are
/// still on the stack.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Grid};
/// use labyrinth_generator::{GenerationEvent, GenerationSteps, MazeSeed};
///
/// let mut grid = Grid::new(3, 3)?;
/// let mut steps = GenerationSteps::new(&mut grid, Coordinate::ORIGIN, MazeSeed::from(1).rng())?;
///
/// let first = steps.step()?;
/// assert_eq!(
///     first,
///     Some(GenerationEvent::CellVisited { coord: Coordinate::ORIGIN, order: 0 })
/// );
///
/// while steps.step()?.is_some() {}
/// assert_eq!(steps.opened_walls(), 8);
/// # Ok::<(), labyrinth_core::GridError>(())
/// ```
#[derive(Debug)]
pub struct GenerationSteps<'a, R> {
    grid: &'a mut Grid,
    rng: R,
    stack: Vec<Coordinate>,
    visited: CoordinateSet,
    opened_walls: usize,
}

impl<'a, R> GenerationSteps<'a, R>
where
    R: Rng,
{
    /// Prepares a run that starts at `start`, drawing choices from `rng`.
    ///
    /// The grid is reset first: every wall is closed and every generation
    /// order cleared.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `start` is outside the grid. The
    /// grid is left untouched in that case.
    pub fn new(grid: &'a mut Grid, start: Coordinate, rng: R) -> Result<Self, GridError> {
        grid.check_bounds(start)?;
        grid.reset();
        let visited = CoordinateSet::for_grid(grid);
        Ok(Self {
            grid,
            rng,
            stack: vec![start],
            visited,
            opened_walls: 0,
        })
    }

    /// Returns `true` once every cell has been visited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.visited.is_full()
    }

    /// Returns the number of cells visited so far.
    #[must_use]
    pub fn visited_cells(&self) -> usize {
        self.visited.len()
    }

    /// Returns the number of walls opened so far.
    #[must_use]
    pub fn opened_walls(&self) -> usize {
        self.opened_walls
    }

    /// Returns the grid being carved.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Advances the run by one event.
    ///
    /// Looking at the cell on top of the stack, a step does exactly one of:
    ///
    /// - visits it, if this is the first time it is on top
    ///   ([`GenerationEvent::CellVisited`]);
    /// - pops it, if it has no unvisited neighbor
    ///   ([`GenerationEvent::Backtracked`]);
    /// - picks one unvisited neighbor uniformly at random, opens the wall
    ///   toward it and pushes it ([`GenerationEvent::WallOpened`]).
    ///
    /// Returns `Ok(None)` once the run is finished.
    ///
    /// # Errors
    ///
    /// Propagates [`GridError`]s from the grid. They cannot occur for a run
    /// created through [`new`](Self::new).
    pub fn step(&mut self) -> Result<Option<GenerationEvent>, GridError> {
        if self.is_finished() {
            return Ok(None);
        }
        let Some(&current) = self.stack.last() else {
            return Ok(None);
        };

        if self.visited.insert(current) {
            let order = self.visited.len() - 1;
            self.grid.set_order(current, order)?;
            let event = GenerationEvent::CellVisited {
                coord: current,
                order,
            };
            log::trace!("{event:?}");
            return Ok(Some(event));
        }

        let mut candidates = self.grid.neighbors(current);
        candidates.retain(|n| !self.visited.contains(n.coord));

        if candidates.is_empty() {
            self.stack.pop();
            let event = GenerationEvent::Backtracked { coord: current };
            log::trace!("{event:?}");
            return Ok(Some(event));
        }

        let next = candidates[self.rng.random_range(0..candidates.len())];
        self.stack.push(next.coord);
        self.grid.open_wall(current, next.direction)?;
        self.opened_walls += 1;
        let event = GenerationEvent::WallOpened {
            from: current,
            to: next.coord,
            direction: next.direction,
        };
        log::trace!("{event:?}");
        Ok(Some(event))
    }

    /// Runs to completion, reporting every event to `observer`.
    ///
    /// Returns the number of opened walls.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`step`](Self::step).
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<usize, GridError>
    where
        O: GenerationObserver + ?Sized,
    {
        while let Some(event) = self.step()? {
            observer.on_event(&event);
        }
        Ok(self.opened_walls)
    }

    /// Runs to completion without observing events.
    ///
    /// Returns the number of opened walls.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`step`](Self::step).
    pub fn run(&mut self) -> Result<usize, GridError> {
        self.run_with(&mut |_: &GenerationEvent| {})
    }
}

#[cfg(test)]
mod tests {
    use labyrinth_core::Direction;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn collect_events(grid: &mut Grid, start: Coordinate, seed: u64) -> Vec<GenerationEvent> {
        let mut steps = GenerationSteps::new(grid, start, Pcg64::seed_from_u64(seed)).unwrap();
        let mut events = vec![];
        let mut observer = |e: &GenerationEvent| events.push(*e);
        steps.run_with(&mut observer).unwrap();
        events
    }

    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        let events = collect_events(&mut grid, Coordinate::ORIGIN, 0);
        assert_eq!(
            events,
            [GenerationEvent::CellVisited {
                coord: Coordinate::ORIGIN,
                order: 0
            }]
        );
        assert_eq!(grid.open_wall_count(), 0);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_wall(Coordinate::ORIGIN, Direction::Right)
            .unwrap();
        let before = grid.clone();

        let err = GenerationSteps::new(&mut grid, Coordinate::new(2, 2), Pcg64::seed_from_u64(0))
            .unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_event_sequence_is_well_formed() {
        let mut grid = Grid::new(5, 4).unwrap();
        let start = Coordinate::new(2, 1);
        let events = collect_events(&mut grid, start, 7);

        let mut visited = CoordinateSet::for_grid(&grid);
        let mut stack = vec![start];
        let mut next_order = 0;
        for event in &events {
            match *event {
                GenerationEvent::CellVisited { coord, order } => {
                    assert_eq!(stack.last(), Some(&coord));
                    assert!(visited.insert(coord));
                    assert_eq!(order, next_order);
                    assert_eq!(grid.cell(coord).unwrap().order(), Some(order));
                    next_order += 1;
                }
                GenerationEvent::WallOpened {
                    from,
                    to,
                    direction,
                } => {
                    assert_eq!(stack.last(), Some(&from));
                    assert_eq!(from.offset(direction), Some(to));
                    assert!(!visited.contains(to));
                    stack.push(to);
                }
                GenerationEvent::Backtracked { coord } => {
                    assert_eq!(stack.pop(), Some(coord));
                }
            }
        }
        assert!(visited.is_full());
        // The run stops on the last visit, never on a backtrack.
        assert!(events.last().unwrap().is_cell_visited());
    }

    #[test]
    fn test_stepping_matches_observed_run() {
        let mut grid_a = Grid::new(6, 6).unwrap();
        let observed = collect_events(&mut grid_a, Coordinate::ORIGIN, 3);

        let mut grid_b = Grid::new(6, 6).unwrap();
        let rng = Pcg64::seed_from_u64(3);
        let mut steps = GenerationSteps::new(&mut grid_b, Coordinate::ORIGIN, rng).unwrap();
        let mut stepped = vec![];
        while let Some(event) = steps.step().unwrap() {
            stepped.push(event);
        }
        assert!(steps.is_finished());
        assert_eq!(steps.step().unwrap(), None);
        assert_eq!(steps.visited_cells(), 36);

        assert_eq!(observed, stepped);
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_new_run_resets_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        let first = collect_events(&mut grid, Coordinate::ORIGIN, 11);
        let snapshot = grid.clone();

        collect_events(&mut grid, Coordinate::ORIGIN, 12);
        let again = collect_events(&mut grid, Coordinate::ORIGIN, 11);

        assert_eq!(first, again);
        assert_eq!(grid, snapshot);
        assert_eq!(grid.open_wall_count(), 15);
    }

    #[test]
    fn test_neighbor_choice_is_unbiased() {
        // From the middle of a 3x1 corridor, left and right are equally likely.
        let start = Coordinate::new(1, 0);
        let mut left = 0;
        let trials = 2000;
        for seed in 0..trials {
            let mut grid = Grid::new(3, 1).unwrap();
            let events = collect_events(&mut grid, start, seed);
            let first_move = events.iter().find_map(|e| match *e {
                GenerationEvent::WallOpened { direction, .. } => Some(direction),
                _ => None,
            });
            if first_move == Some(Direction::Left) {
                left += 1;
            }
        }
        assert!(
            (800..1200).contains(&left),
            "left chosen {left}/{trials} times"
        );
    }
}

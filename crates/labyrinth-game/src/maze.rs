use labyrinth_core::{Coordinate, Direction, Grid};
use labyrinth_generator::{GeneratedMaze, GenerationSteps, MazeGenerator, MazeSeed};
use labyrinth_solver::{BfsSolver, Path, SolveSteps};
use rand_pcg::Pcg64;

use crate::{GameError, MazeConfig};

/// The result of a successful player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The player moved to a new cell.
    Moved(Coordinate),
    /// The player moved onto the target for the first time.
    ReachedTarget(Coordinate),
}

impl MoveOutcome {
    /// Returns the player's new position.
    #[must_use]
    pub fn position(self) -> Coordinate {
        match self {
            Self::Moved(pos) | Self::ReachedTarget(pos) => pos,
        }
    }
}

/// An interactive maze session.
///
/// The session owns its [`Grid`] for its whole lifetime. Regenerating resets
/// the grid in place and puts the player back at the start; solving only reads
/// the grid.
///
/// # Examples
///
/// ```
/// use labyrinth_core::Direction;
/// use labyrinth_game::{GameError, Maze, MazeConfig};
///
/// let mut maze = Maze::new(MazeConfig::new(5, 5))?;
///
/// // Walls block movement; a blocked move leaves the session unchanged.
/// let start = maze.position();
/// match maze.move_player(Direction::Top) {
///     Err(GameError::InvalidMove { position, .. }) => assert_eq!(position, start),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// # Ok::<(), GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    seed: MazeSeed,
    position: Coordinate,
    solved: bool,
}

impl Maze {
    /// Creates a session and generates its first maze.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Grid`] if the configuration has a zero dimension
    /// or places the start or target outside the grid.
    pub fn new(config: MazeConfig) -> Result<Self, GameError> {
        let grid = config.build_grid()?;
        let mut this = Self {
            config,
            grid,
            seed: MazeSeed::from(0),
            position: config.start,
            solved: false,
        };
        this.reset()?;
        Ok(this)
    }

    /// Returns the configuration the session was created from.
    #[must_use]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Returns the maze's wall topology.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the seed of the current maze.
    #[must_use]
    pub fn seed(&self) -> MazeSeed {
        self.seed
    }

    /// Returns the cell the player starts from.
    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.config.start
    }

    /// Returns the cell the player must reach.
    #[must_use]
    pub fn target(&self) -> Coordinate {
        self.config.target()
    }

    /// Returns the player's current position.
    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Returns `true` once the player has reached the target.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn next_seed(&self) -> MazeSeed {
        self.config
            .seed
            .map_or_else(MazeSeed::random, MazeSeed::from)
    }

    fn restart(&mut self) {
        self.position = self.config.start;
        self.solved = self.position == self.target();
    }

    /// Generates a new maze and puts the player back at the start.
    ///
    /// With a configured seed the same maze is generated every time;
    /// otherwise each call draws a fresh seed.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::Grid`]; it cannot occur for a session created
    /// through [`new`](Self::new).
    pub fn reset(&mut self) -> Result<GeneratedMaze, GameError> {
        self.seed = self.next_seed();
        self.restart();
        let generator = MazeGenerator::new();
        let maze = generator.generate_with_seed(&mut self.grid, self.config.start, self.seed)?;
        log::info!(
            "new {}x{} maze, seed {}, target {}",
            self.config.width,
            self.config.height,
            self.seed,
            self.target()
        );
        Ok(maze)
    }

    /// Starts generating a new maze one step at a time.
    ///
    /// The player is put back at the start immediately. The maze is complete
    /// once the returned run is finished; until then the grid is only
    /// partially carved.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::Grid`]; it cannot occur for a session created
    /// through [`new`](Self::new).
    pub fn regenerate_steps(&mut self) -> Result<GenerationSteps<'_, Pcg64>, GameError> {
        self.seed = self.next_seed();
        self.restart();
        let generator = MazeGenerator::new();
        let steps = generator.steps_with_seed(&mut self.grid, self.config.start, self.seed)?;
        Ok(steps)
    }

    /// Returns `true` if the player can step in `direction`.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        self.grid.can_move(self.position, direction)
    }

    /// Moves the player one cell in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if a wall or the grid border is in
    /// the way. The player does not move in that case.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        let next = self
            .position
            .offset(direction)
            .filter(|_| self.can_move(direction))
            .ok_or(GameError::InvalidMove {
                position: self.position,
                direction,
            })?;
        Ok(self.set_position(next))
    }

    fn set_position(&mut self, position: Coordinate) -> MoveOutcome {
        self.position = position;
        if !self.solved && position == self.target() {
            self.solved = true;
            log::debug!("target {position} reached");
            return MoveOutcome::ReachedTarget(position);
        }
        MoveOutcome::Moved(position)
    }

    /// Finds the shortest path from the player's current position to the
    /// target.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Solver`] if the target is unreachable, which only
    /// happens while a step-wise regeneration is unfinished.
    pub fn solve(&self) -> Result<Path, GameError> {
        let path = BfsSolver::new().solve(&self.grid, self.position, self.target())?;
        Ok(path)
    }

    /// Starts solving from the player's current position one step at a time.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::Solver`]; coordinates are always in bounds for
    /// a session created through [`new`](Self::new).
    pub fn solve_steps(&self) -> Result<SolveSteps<'_>, GameError> {
        let steps = BfsSolver::new().steps(&self.grid, self.position, self.target())?;
        Ok(steps)
    }

    /// Walks the player along `path`, one move per coordinate.
    ///
    /// Returns the outcome of every move in order, which a presenter can
    /// replay at its own pace.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PathMismatch`] if `path` does not start at the
    /// player's position, or [`GameError::InvalidMove`] at the first move
    /// that crosses a wall. Moves before a failing move are kept.
    pub fn follow_path(&mut self, path: &Path) -> Result<Vec<MoveOutcome>, GameError> {
        if path.start() != self.position {
            return Err(GameError::PathMismatch {
                position: self.position,
                path_start: path.start(),
            });
        }
        path.directions()
            .map(|direction| self.move_player(direction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seeded(width: u32, height: u32, seed: u64) -> Maze {
        Maze::new(MazeConfig {
            seed: Some(seed),
            ..MazeConfig::new(width, height)
        })
        .unwrap()
    }

    #[test]
    fn test_new_generates_perfect_maze() {
        let maze = seeded(8, 6, 1);
        assert_eq!(maze.grid().open_wall_count(), 47);
        assert_eq!(maze.position(), Coordinate::ORIGIN);
        assert_eq!(maze.seed(), MazeSeed::from(1));
        assert!(!maze.is_solved());
    }

    #[test]
    fn test_invalid_config() {
        let err = Maze::new(MazeConfig::new(0, 3)).unwrap_err();
        assert!(err.is_grid());
    }

    #[test]
    fn test_blocked_move_is_rejected() {
        let mut maze = seeded(4, 4, 2);
        let dir = Direction::ALL
            .into_iter()
            .find(|&d| !maze.can_move(d))
            .unwrap();
        assert_eq!(
            maze.move_player(dir),
            Err(GameError::InvalidMove {
                position: Coordinate::ORIGIN,
                direction: dir
            })
        );
        assert_eq!(maze.position(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_reaching_target_once() {
        let mut maze = seeded(5, 1, 0);
        for x in 1..4 {
            assert_eq!(
                maze.move_player(Direction::Right),
                Ok(MoveOutcome::Moved(Coordinate::new(x, 0)))
            );
        }
        assert_eq!(
            maze.move_player(Direction::Right),
            Ok(MoveOutcome::ReachedTarget(Coordinate::new(4, 0)))
        );
        assert!(maze.is_solved());

        // Stepping off and back does not report the target again.
        maze.move_player(Direction::Left).unwrap();
        assert!(maze.move_player(Direction::Right).unwrap().is_moved());
        assert!(maze.is_solved());
    }

    #[test]
    fn test_solve_from_current_position() {
        let mut maze = seeded(9, 9, 77);
        let full = maze.solve().unwrap();
        assert_eq!(full.start(), Coordinate::ORIGIN);

        // Wander off the solution, then re-solve from there.
        let position = maze.position();
        let off_path = |d: Direction| !full.contains(position.offset(d).unwrap());
        let detour = Direction::ALL
            .into_iter()
            .find(|&d| maze.can_move(d) && off_path(d));
        if let Some(dir) = detour {
            maze.move_player(dir).unwrap();
        } else {
            maze.move_player(full.directions().next().unwrap()).unwrap();
        }

        let path = maze.solve().unwrap();
        assert_eq!(path.start(), maze.position());
        assert_eq!(path.target(), maze.target());
        assert!(path.is_walkable_in(maze.grid()));

        let outcomes = maze.follow_path(&path).unwrap();
        assert_eq!(outcomes.len(), path.edge_count());
        assert!(outcomes.last().unwrap().is_reached_target());
        assert_eq!(maze.position(), maze.target());
        assert!(maze.is_solved());
    }

    #[test]
    fn test_follow_path_must_start_at_player() {
        let mut maze = seeded(4, 4, 5);
        let path = Path::single(Coordinate::new(1, 1));
        assert_eq!(
            maze.follow_path(&path),
            Err(GameError::PathMismatch {
                position: Coordinate::ORIGIN,
                path_start: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn test_reset_with_fixed_seed_is_stable() {
        let mut maze = seeded(6, 6, 123);
        let before = maze.grid().clone();
        let path = maze.solve().unwrap();
        maze.follow_path(&path).unwrap();

        maze.reset().unwrap();
        assert_eq!(maze.grid(), &before);
        assert_eq!(maze.position(), Coordinate::ORIGIN);
        assert!(!maze.is_solved());
    }

    #[test]
    fn test_reset_without_seed_draws_new_seed() {
        let mut maze = Maze::new(MazeConfig::new(12, 12)).unwrap();
        let first = maze.seed();
        maze.reset().unwrap();
        // Two random 64-bit seeds colliding is practically impossible.
        assert_ne!(maze.seed(), first);
    }

    #[test]
    fn test_step_wise_regeneration() {
        let mut maze = seeded(5, 5, 8);
        let before = maze.grid().clone();

        let mut steps = maze.regenerate_steps().unwrap();
        let mut count = 0;
        while steps.step().unwrap().is_some() {
            count += 1;
        }
        assert!(steps.is_finished());
        // 25 visits, 24 walls, plus backtracks.
        assert!(count >= 49);

        assert_eq!(maze.grid(), &before);
        assert_eq!(maze.position(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_solve_during_unfinished_regeneration() {
        let mut maze = seeded(5, 5, 8);
        {
            let mut steps = maze.regenerate_steps().unwrap();
            steps.step().unwrap();
        }
        let err = maze.solve().unwrap_err();
        assert!(matches!(
            err,
            GameError::Solver(labyrinth_solver::SolverError::UnreachableTarget { .. })
        ));
    }

    #[test]
    fn test_start_equals_target() {
        let maze = Maze::new(MazeConfig {
            target: Some(Coordinate::ORIGIN),
            ..MazeConfig::new(3, 3)
        })
        .unwrap();
        assert!(maze.is_solved());
        assert_eq!(maze.solve().unwrap().edge_count(), 0);
    }

    proptest! {
        #[test]
        fn test_auto_solve_always_reaches_target(
            width in 1u32..10,
            height in 1u32..10,
            seed in any::<u64>(),
        ) {
            let mut maze = seeded(width, height, seed);
            let path = maze.solve().unwrap();
            maze.follow_path(&path).unwrap();
            prop_assert_eq!(maze.position(), maze.target());
            prop_assert!(maze.is_solved());
        }
    }
}

//! Player movement over a generated maze. No binary in this crate drives a [`Session`]:
//! front ends own the input loop and call [`Session::step`] with each move.

use rand::rngs::StdRng;

use crate::{
    error::MazeError,
    generators::{generate, get_rng},
    maze::{Coord, Direction, Maze},
    solvers::{Solution, solve},
};

/// A walker moving through the maze one cell at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    position: Coord,
}

impl Player {
    /// Places a player on the maze entrance, or the top-left cell when there is none.
    pub fn at_entrance(maze: &Maze) -> Self {
        Player {
            position: maze.entrance().unwrap_or((0, 0)),
        }
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Attempt to move the player in the specified direction.
    /// Returns the new position if the move is successful, None when a wall or the maze
    /// edge is in the way.
    pub fn try_move(&mut self, maze: &Maze, direction: Direction) -> Option<Coord> {
        let (x, y) = self.position;
        if !maze.can_move(x, y, direction) {
            return None;
        }
        self.position = maze.neighbor(self.position, direction)?;
        tracing::trace!("[player] moved {:?} to {:?}", direction, self.position);
        Some(self.position)
    }

    /// Check if the player stands on the exit.
    pub fn reached_exit(&self, maze: &Maze) -> bool {
        maze.is_in_bounds(self.position) && maze.is_exit(self.position.0, self.position.1)
    }
}

/// Outcome of a single [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// A wall or the edge blocked the move.
    Blocked,
    Moved(Coord),
    /// The exit was reached and a fresh maze has replaced the old one.
    Escaped,
}

/// One play-through state: the current maze, the player in it, and the optional
/// solution overlay.
pub struct Session {
    maze: Maze,
    player: Player,
    solution: Option<Solution>,
    rng: StdRng,
}

impl Session {
    pub fn new(width: u16, height: u16, seed: Option<u64>) -> Result<Self, MazeError> {
        let mut rng = get_rng(seed);
        let maze = generate(width, height, &mut rng)?;
        let player = Player::at_entrance(&maze);
        Ok(Session {
            maze,
            player,
            solution: None,
            rng,
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The solution overlay, when shown.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Replaces the maze with a fresh one of the same size and puts the player back on the
    /// entrance. Any shown solution is hidden.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        self.maze = generate(self.maze.width(), self.maze.height(), &mut self.rng)?;
        self.player = Player::at_entrance(&self.maze);
        self.solution = None;
        tracing::info!(
            "[session] new {}x{} maze",
            self.maze.width(),
            self.maze.height()
        );
        Ok(())
    }

    /// Shows the solution when hidden, hides it when shown. Returns whether it is now shown.
    pub fn toggle_solution(&mut self) -> Result<bool, MazeError> {
        self.solution = match self.solution.take() {
            Some(_) => None,
            None => Some(solve(&self.maze)?),
        };
        Ok(self.solution.is_some())
    }

    /// Moves the player; reaching the exit starts over on a new maze.
    pub fn step(&mut self, direction: Direction) -> Result<StepResult, MazeError> {
        let Some(position) = self.player.try_move(&self.maze, direction) else {
            return Ok(StepResult::Blocked);
        };
        if self.player.reached_exit(&self.maze) {
            tracing::info!("[session] exit reached at {:?}", position);
            self.regenerate()?;
            return Ok(StepResult::Escaped);
        }
        Ok(StepResult::Moved(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    /// Direction leading from one cell to an adjacent one.
    fn direction_between(maze: &Maze, from: Coord, to: Coord) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|&d| maze.neighbor(from, d) == Some(to))
            .unwrap()
    }

    #[test]
    fn test_player_starts_on_entrance() {
        let maze = generate_maze(5, 5, Some(3)).unwrap();
        let player = Player::at_entrance(&maze);
        assert_eq!(player.position(), (0, 0));
        assert!(!player.reached_exit(&maze));
    }

    #[test]
    fn test_walls_block_player() {
        let maze = generate_maze(5, 5, Some(3)).unwrap();
        let mut player = Player::at_entrance(&maze);
        // The entrance opening leads outside, which is never walkable
        assert_eq!(player.try_move(&maze, Direction::Left), None);
        assert_eq!(player.try_move(&maze, Direction::Up), None);
        assert_eq!(player.position(), (0, 0));
    }

    #[test]
    fn test_player_follows_solution_to_exit() {
        let maze = generate_maze(8, 6, Some(21)).unwrap();
        let solution = solve(&maze).unwrap();
        let mut player = Player::at_entrance(&maze);
        for (from, to) in solution.segments() {
            assert_eq!(player.try_move(&maze, direction_between(&maze, from, to)), Some(to));
        }
        assert!(player.reached_exit(&maze));
    }

    #[test]
    fn test_session_escape_regenerates() {
        let mut session = Session::new(2, 1, Some(8)).unwrap();
        assert_eq!(session.step(Direction::Up).unwrap(), StepResult::Blocked);
        assert_eq!(session.step(Direction::Right).unwrap(), StepResult::Escaped);
        assert_eq!(session.player().position(), (0, 0));
    }

    #[test]
    fn test_session_moves() {
        let mut session = Session::new(6, 6, Some(5)).unwrap();
        let solution = solve(session.maze()).unwrap();
        let (from, to) = solution.segments().next().unwrap();
        let direction = direction_between(session.maze(), from, to);
        assert_eq!(session.step(direction).unwrap(), StepResult::Moved(to));
    }

    #[test]
    fn test_toggle_solution() {
        let mut session = Session::new(10, 10, Some(1)).unwrap();
        assert!(session.solution().is_none());
        assert!(session.toggle_solution().unwrap());
        assert_eq!(session.solution().and_then(Solution::first), Some((0, 0)));
        assert!(!session.toggle_solution().unwrap());
        assert!(session.solution().is_none());

        session.toggle_solution().unwrap();
        session.regenerate().unwrap();
        assert!(session.solution().is_none());
    }
}

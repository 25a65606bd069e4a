mod dfs;

use crate::{
    error::MazeError,
    maze::{Coord, Maze},
};
use dfs::solve_dfs;

/// An ordered route through the maze, from the entrance to the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    cells: Vec<Coord>,
}

impl Solution {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Solution { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Consecutive pairs of the route, each one step long.
    pub fn segments(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

/// Finds the route from the entrance to the exit.
///
/// Fails with [`MazeError::NoPathFound`] when the maze has no entrance or no open
/// route to an exit, which never happens for a maze built by
/// [`generate`](crate::generators::generate).
pub fn solve(maze: &Maze) -> Result<Solution, MazeError> {
    let start = maze.entrance().ok_or(MazeError::NoPathFound)?;
    match solve_dfs(maze, start) {
        Some(cells) => {
            tracing::debug!("[solve] path of {} cells found from {:?}", cells.len(), start);
            Ok(Solution::new(cells))
        }
        None => {
            tracing::warn!("[solve] no path found from {:?}", start);
            Err(MazeError::NoPathFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;
    use crate::maze::Direction;
    use proptest::prelude::*;

    fn check_route(maze: &Maze, solution: &Solution) -> Result<(), TestCaseError> {
        prop_assert_eq!(solution.first(), maze.entrance());
        prop_assert_eq!(solution.last(), maze.exit());
        for (from, to) in solution.segments() {
            let direction = Direction::ALL
                .into_iter()
                .find(|&d| maze.neighbor(from, d) == Some(to));
            prop_assert!(direction.is_some(), "{:?} and {:?} are not adjacent", from, to);
            if let Some(direction) = direction {
                prop_assert!(maze.can_move(from.0, from.1, direction));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn generated_mazes_are_solvable(
            width in 1..=40u16,
            height in 1..=40u16,
            seed in any::<u64>(),
        ) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            let solution = solve(&maze).unwrap();
            check_route(&maze, &solution)?;
        }

        #[test]
        fn solving_is_deterministic(width in 1..=40u16, height in 1..=40u16, seed in any::<u64>()) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            prop_assert_eq!(solve(&maze), solve(&maze));
        }
    }

    #[test]
    fn test_route_visits_each_cell_once() {
        let maze = generate_maze(30, 20, Some(11)).unwrap();
        let solution = solve(&maze).unwrap();
        let mut cells = solution.cells().to_vec();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), solution.len());
    }

    #[test]
    fn test_single_cell() {
        let maze = generate_maze(1, 1, None).unwrap();
        assert_eq!(solve(&maze).unwrap().into_cells(), vec![(0, 0)]);
    }

    #[test]
    fn test_two_cells() {
        for seed in 0..10 {
            let maze = generate_maze(2, 1, Some(seed)).unwrap();
            assert_eq!(solve(&maze).unwrap().into_cells(), vec![(0, 0), (1, 0)]);
        }
    }

    #[test]
    fn test_walled_grid_has_no_path() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.mark_entrance((0, 0));
        maze.mark_exit((1, 1));
        assert_eq!(solve(&maze), Err(MazeError::NoPathFound));
    }

    #[test]
    fn test_missing_entrance() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.carve((0, 0), Direction::Right);
        maze.mark_exit((1, 0));
        assert_eq!(solve(&maze), Err(MazeError::NoPathFound));
    }

    #[test]
    fn test_missing_exit() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.carve((0, 0), Direction::Right);
        maze.carve((1, 0), Direction::Right);
        maze.mark_entrance((0, 0));
        assert_eq!(solve(&maze), Err(MazeError::NoPathFound));
    }

    #[test]
    fn test_segments() {
        let solution = Solution::new(vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(
            solution.segments().collect::<Vec<_>>(),
            vec![((0, 0), (1, 0)), ((1, 0), (1, 1))]
        );
        assert!(solution.contains((1, 1)));
        assert!(!solution.contains((0, 1)));
    }
}

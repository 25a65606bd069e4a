use std::collections::HashSet;

use crate::maze::{Coord, Direction, Maze};

/// Walks the maze depth-first from `start` until it steps on a cell flagged as exit.
///
/// Directions are tried in `Direction::ALL` order and the first open, unvisited one is
/// taken. `route` holds the cells walked so far on the current branch; at a dead end the
/// walker retreats to the last of them. Returns `None` once there is nowhere left to
/// retreat to.
pub fn solve_dfs(maze: &Maze, start: Coord) -> Option<Vec<Coord>> {
    let mut stack = vec![start];
    let mut route: Vec<Coord> = Vec::new();
    let mut visited = HashSet::new();

    while let Some(current) = stack.pop() {
        visited.insert(current);

        if maze[current].is_exit() {
            route.push(current);
            return Some(route);
        }

        let next = Direction::ALL.into_iter().find_map(|d| {
            maze.neighbor(current, d)
                .filter(|n| !visited.contains(n) && !maze[current].has_wall(d))
        });

        match next {
            Some(neighbor) => {
                stack.push(neighbor);
                route.push(current);
            }
            None => {
                // Dead end: resume from the previous cell on the route
                let previous = route.pop()?;
                tracing::trace!("[solve_dfs] dead end at {:?}, back to {:?}", current, previous);
                stack.push(previous);
            }
        }
    }

    None
}

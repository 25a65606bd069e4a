use rand::Rng;

use crate::maze::{Coord, Maze, get_neighbors};

/// Carves a spanning tree into a fully walled maze with a randomized depth-first walk.
///
/// The walk keeps an explicit stack instead of recursing, so maze size is bounded by
/// memory rather than call depth.
pub fn recursive_backtrack<R: Rng>(maze: &mut Maze, start: Coord, rng: &mut R) {
    let width = maze.width() as usize;
    let index = |(x, y): Coord| y as usize * width + x as usize;

    let mut visited = vec![false; maze.cell_count()];
    visited[index(start)] = true;

    // The stack will keep only visited cells
    let mut stack = vec![start];
    let mut backtracks = 0usize;

    while let Some(cell) = stack.pop() {
        let neighbors = get_neighbors(cell, maze)
            .filter(|&(_, c)| !visited[index(c)])
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            backtracks += 1;
            continue;
        }

        let (direction, neighbor) = neighbors[rng.random_range(0..neighbors.len())];
        maze.carve(cell, direction);
        visited[index(neighbor)] = true;
        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor to carve the maze in that neighbor's direction
        stack.push(neighbor);
    }

    tracing::debug!("[recursive_backtrack] finished after {} backtracks", backtracks);
}

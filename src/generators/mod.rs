use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Direction, Maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `width` x `height` cells.
///
/// The entrance is the top-left cell, opened on its left side, and the exit is the
/// bottom-right cell, opened on its right side. Every cell is reachable from every
/// other through exactly one route.
pub fn generate<R: Rng>(width: u16, height: u16, rng: &mut R) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;

    let entrance = (0, 0);
    let exit = (width - 1, height - 1);
    maze.mark_entrance(entrance);
    maze.carve(entrance, Direction::Left);
    maze.mark_exit(exit);
    maze.carve(exit, Direction::Right);

    recursive_backtrack(&mut maze, exit, rng);

    tracing::debug!(
        "[generate] {}x{} maze carved with {} passages",
        width,
        height,
        maze.passages().count()
    );
    Ok(maze)
}

/// Generates a maze with a fresh generator, seeded when `seed` is given.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = get_rng(seed);
    generate(width, height, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Coord, get_neighbors};
    use proptest::prelude::*;
    use std::collections::{HashSet, VecDeque};

    fn reachable_from(maze: &Maze, start: Coord) -> usize {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(coord) = queue.pop_front() {
            for (d, n) in get_neighbors(coord, maze) {
                if maze.can_move(coord.0, coord.1, d) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut rng = get_rng(Some(0));
        assert_eq!(
            generate(0, 5, &mut rng),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(generate_maze(5, 0, None).is_err());
    }

    proptest! {
        #[test]
        fn spanning_tree(width in 1..=40u16, height in 1..=40u16, seed in any::<u64>()) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            prop_assert_eq!(maze.passages().count(), maze.cell_count() - 1);
            prop_assert_eq!(reachable_from(&maze, (0, 0)), maze.cell_count());
            prop_assert_eq!(reachable_from(&maze, (width - 1, height - 1)), maze.cell_count());
        }

        #[test]
        fn walls_are_symmetric(width in 1..=40u16, height in 1..=40u16, seed in any::<u64>()) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            for ((x, y), cell) in maze.cells() {
                for (d, (nx, ny)) in get_neighbors((x, y), &maze) {
                    prop_assert_eq!(
                        cell.has_wall(d),
                        maze.wall_present(nx, ny, d.opposite()),
                        "asymmetric wall between ({}, {}) and ({}, {})", x, y, nx, ny
                    );
                }
            }
        }

        #[test]
        fn markers_are_unique(width in 1..=40u16, height in 1..=40u16, seed in any::<u64>()) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            let entrances = maze.cells().filter(|(_, c)| c.is_entrance()).count();
            let exits = maze.cells().filter(|(_, c)| c.is_exit()).count();
            prop_assert_eq!(entrances, 1);
            prop_assert_eq!(exits, 1);
            prop_assert_eq!(maze.entrance(), Some((0, 0)));
            prop_assert_eq!(maze.exit(), Some((width - 1, height - 1)));
            if maze.cell_count() > 1 {
                prop_assert_ne!(maze.entrance(), maze.exit());
            }
        }

        #[test]
        fn boundary_is_closed_except_openings(
            width in 1..=40u16,
            height in 1..=40u16,
            seed in any::<u64>(),
        ) {
            let maze = generate_maze(width, height, Some(seed)).unwrap();
            let exit = (width - 1, height - 1);
            for (coord, cell) in maze.cells().filter(|&(c, _)| maze.is_boundary(c)) {
                for d in Direction::ALL {
                    if maze.neighbor(coord, d).is_some() {
                        continue;
                    }
                    let opening = (coord == (0, 0) && d == Direction::Left)
                        || (coord == exit && d == Direction::Right);
                    prop_assert_eq!(cell.has_wall(d), !opening, "{:?} {:?}", coord, d);
                }
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let maze = generate_maze(1, 1, None).unwrap();
        assert!(maze.is_entrance(0, 0));
        assert!(maze.is_exit(0, 0));
        assert!(!maze.wall_present(0, 0, Direction::Left));
        assert!(!maze.wall_present(0, 0, Direction::Right));
        assert!(maze.wall_present(0, 0, Direction::Up));
        assert!(maze.wall_present(0, 0, Direction::Down));
    }

    #[test]
    fn test_two_cells_have_one_carving() {
        for seed in 0..10 {
            let maze = generate_maze(2, 1, Some(seed)).unwrap();
            assert_eq!(maze.passages().collect::<Vec<_>>(), vec![((0, 0), (1, 0))]);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_maze(12, 9, Some(42)).unwrap();
        let b = generate_maze(12, 9, Some(42)).unwrap();
        assert_eq!(a, b);
    }
}

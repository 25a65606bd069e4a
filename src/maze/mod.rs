pub mod cell;
mod grid;

pub use cell::Cell;
use grid::Grid;

use crate::error::MazeError;

/// A grid coordinate, `x` growing rightward and `y` growing downward.
pub type Coord = (u16, u16);

/// Cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in the order the solver tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub(crate) fn initial(self) -> char {
        match self {
            Direction::Up => 'T',
            Direction::Right => 'R',
            Direction::Down => 'B',
            Direction::Left => 'L',
        }
    }
}

/// A rectangular maze of bit-encoded cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze of the given size with every wall standing and no markers set.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, Cell::WALLED),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.cells().len()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width() && coord.1 < self.height()
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        self.grid.is_boundary(coord.0, coord.1)
    }

    /// The in-bounds cell one step from `coord` in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (x, y) = coord;
        let next = match direction {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Right => (x.checked_add(1)?, y),
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Left => (x.checked_sub(1)?, y),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Whether a wall stands on the `direction` side of `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn wall_present(&self, x: u16, y: u16, direction: Direction) -> bool {
        self.grid[(x, y)].has_wall(direction)
    }

    pub fn is_entrance(&self, x: u16, y: u16) -> bool {
        self.grid[(x, y)].is_entrance()
    }

    pub fn is_exit(&self, x: u16, y: u16) -> bool {
        self.grid[(x, y)].is_exit()
    }

    /// Whether a walker at `(x, y)` may step one cell in `direction`.
    ///
    /// A move is blocked by a wall on that side or by the maze edge, so the
    /// entrance and exit openings never let a walker leave the grid.
    /// Out-of-bounds starting cells can never move.
    pub fn can_move(&self, x: u16, y: u16, direction: Direction) -> bool {
        self.is_in_bounds((x, y))
            && !self.wall_present(x, y, direction)
            && self.neighbor((x, y), direction).is_some()
    }

    /// Clears the wall between `from` and its neighbor in `direction`, on both sides.
    /// When `from` faces the maze edge, only its own wall is cleared, opening it to the outside.
    ///
    /// # Panics
    /// If `from` is out of bounds.
    pub fn carve(&mut self, from: Coord, direction: Direction) {
        self.grid[from].remove_wall(direction);
        if let Some(to) = self.neighbor(from, direction) {
            self.grid[to].remove_wall(direction.opposite());
        }
    }

    pub fn mark_entrance(&mut self, coord: Coord) {
        self.grid[coord].mark_entrance();
    }

    pub fn mark_exit(&mut self, coord: Coord) {
        self.grid[coord].mark_exit();
    }

    /// Coordinate of the first cell flagged as entrance, in row-major order.
    pub fn entrance(&self) -> Option<Coord> {
        self.find(Cell::is_entrance)
    }

    /// Coordinate of the first cell flagged as exit, in row-major order.
    pub fn exit(&self) -> Option<Coord> {
        self.find(Cell::is_exit)
    }

    fn find(&self, pred: impl Fn(Cell) -> bool) -> Option<Coord> {
        self.grid
            .cells()
            .iter()
            .position(|&c| pred(c))
            .map(|idx| self.grid.unravel_index(idx))
    }

    /// Iterates over every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (self.grid.unravel_index(idx), cell))
    }

    /// Internal passages: adjacent pairs (rightward and downward) whose shared side is open
    /// on the first cell.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells().flat_map(move |(coord, cell)| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter(move |&d| !cell.has_wall(d))
                .filter_map(move |d| self.neighbor(coord, d).map(|n| (coord, n)))
        })
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions,
/// yielded with the direction leading to it, in `Direction::ALL` order.
pub fn get_neighbors(coord: Coord, maze: &Maze) -> impl Iterator<Item = (Direction, Coord)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |d| maze.neighbor(coord, d).map(|n| (d, n)))
}

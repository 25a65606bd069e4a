use std::fmt;

use crate::maze::Direction;

/// A single maze cell, encoded as independent bit flags.
///
/// The four low bits are walls (a set bit blocks movement through that side),
/// the next two mark the entrance and the exit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const WALL_TOP: u8 = 1;
    pub const WALL_RIGHT: u8 = 2;
    pub const WALL_BOTTOM: u8 = 4;
    pub const WALL_LEFT: u8 = 8;
    pub const IS_ENTRANCE: u8 = 16;
    pub const IS_EXIT: u8 = 32;

    const ALL_WALLS: u8 = Self::WALL_TOP | Self::WALL_RIGHT | Self::WALL_BOTTOM | Self::WALL_LEFT;

    /// A fresh cell: walled on every side, no markers.
    pub const WALLED: Cell = Cell(Self::ALL_WALLS);

    /// Builds a cell from raw flag bits. Bits outside the six known flags are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Cell(bits & (Self::ALL_WALLS | Self::IS_ENTRANCE | Self::IS_EXIT))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Wall flag guarding the given side of a cell.
    pub const fn wall_flag(direction: Direction) -> u8 {
        match direction {
            Direction::Up => Self::WALL_TOP,
            Direction::Right => Self::WALL_RIGHT,
            Direction::Down => Self::WALL_BOTTOM,
            Direction::Left => Self::WALL_LEFT,
        }
    }

    pub fn has_wall(self, direction: Direction) -> bool {
        self.0 & Self::wall_flag(direction) != 0
    }

    pub fn remove_wall(&mut self, direction: Direction) {
        self.0 &= !Self::wall_flag(direction);
    }

    pub fn add_wall(&mut self, direction: Direction) {
        self.0 |= Self::wall_flag(direction);
    }

    pub fn is_entrance(self) -> bool {
        self.0 & Self::IS_ENTRANCE != 0
    }

    pub fn is_exit(self) -> bool {
        self.0 & Self::IS_EXIT != 0
    }

    pub fn mark_entrance(&mut self) {
        self.0 |= Self::IS_ENTRANCE;
    }

    pub fn mark_exit(&mut self) {
        self.0 |= Self::IS_EXIT;
    }

    /// Number of sides still walled.
    pub fn wall_count(self) -> u32 {
        (self.0 & Self::ALL_WALLS).count_ones()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sides: String = Direction::ALL
            .iter()
            .map(|&d| if self.has_wall(d) { d.initial() } else { '.' })
            .collect();
        write!(f, "Cell({sides}")?;
        if self.is_entrance() {
            write!(f, " entrance")?;
        }
        if self.is_exit() {
            write!(f, " exit")?;
        }
        write!(f, ")")
    }
}

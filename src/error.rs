use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Generation was asked for a grid with a zero side.
    #[error("invalid maze dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimensions { width: u16, height: u16 },
    /// The grid has no open route from its entrance to its exit.
    #[error("no path found from the entrance to the exit")]
    NoPathFound,
}

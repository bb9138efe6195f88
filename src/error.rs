use grid_util::point::Point;
use thiserror::Error;

/// Errors raised by [Grid](crate::grid::Grid) construction, parsing and position lookups.
///
/// An unreachable goal is not an error: searches report it as an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },
    #[error("position {position} is outside the {size}x{size} grid")]
    OutOfBounds { position: Point, size: usize },
    #[error("unknown tile {tile:?} at line {line}, column {column}")]
    UnknownTile {
        tile: char,
        line: usize,
        column: usize,
    },
    #[error("line {line} has {len} tiles but the grid is {size} wide")]
    RaggedRow { line: usize, len: usize, size: usize },
}

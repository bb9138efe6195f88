//! # route_optimizer
//!
//! Finds shortest routes between two cells of a square grid containing walls, using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Movement
//! is restricted to the four orthogonal directions at a uniform cost of [STEP_COST].
//!
//! The frontier is scanned linearly and ties on `f` are resolved in favour of the cell that was
//! discovered first, so results are fully deterministic. The grid additionally maintains
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) so that a
//! search towards an unreachable goal can usually be answered without flood-filling.
//!
//! ```
//! use route_optimizer::{find_path, grid::Grid, Point};
//!
//! let mut grid = Grid::new(3).unwrap();
//! grid.toggle_wall(&Point::new(1, 1)).unwrap();
//! let path = find_path(Point::new(0, 0), Point::new(2, 2), &grid).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod astar;
pub mod editor;
pub mod error;
pub mod grid;
pub mod solver;

use itertools::Itertools;

use crate::error::GridError;
use crate::grid::Grid;
use crate::solver::{astar::AstarSolver, GridSolver};

pub use grid_util::point::Point;

/// A cell coordinate, `(0, 0)` being the top-left corner.
pub type Position = Point;
/// Positions from start to goal inclusive. Empty when no route exists.
pub type Path = Vec<Point>;

/// Grid size used by the [editor](crate::editor::Editor) when none is given.
pub const DEFAULT_GRID_SIZE: usize = 20;
/// Largest accepted grid size. A grid this large holds about 16.7 million cells, which with
/// their connected components takes a few hundred megabytes.
pub const MAX_GRID_SIZE: usize = 4096;
/// Cost of a single orthogonal move.
pub const STEP_COST: i32 = 1;

/// Computes a shortest path from `start` to `end` with the default [AstarSolver].
pub fn find_path(start: Point, end: Point, grid: &Grid) -> Result<Path, GridError> {
    AstarSolver::new().find_path(grid, start, end)
}

/// Number of steps taken along `path`, or [None] for the empty path.
pub fn path_length(path: &[Point]) -> Option<usize> {
    path.len().checked_sub(1)
}

/// Checks that every consecutive pair of positions is orthogonally adjacent.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}

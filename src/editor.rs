//! Interactive editing of a route problem: place a start, then an end, then toggle walls, and
//! ask for the route between the two. Rendering is left to the caller, which can query
//! [Editor::cell_kind] per cell or print the [Display](fmt::Display) form.
use core::fmt;
use grid_util::point::Point;
use log::debug;
use thiserror::Error;

use crate::error::GridError;
use crate::grid::Grid;
use crate::solver::{astar::AstarSolver, GridSolver};
use crate::{path_length, Path};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    #[error("a start and an end must be placed before searching")]
    MissingEndpoints,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// What a click does next. Walls are placed indefinitely once both endpoints are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    PlacingStart,
    PlacingEnd,
    PlacingWalls,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Mode::PlacingStart => "Place Start",
            Mode::PlacingEnd => "Place End",
            Mode::PlacingWalls => "Place Walls",
        };
        f.write_str(label)
    }
}

/// How a cell should be shown, in decreasing order of precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Start,
    End,
    Wall,
    Path,
    Empty,
}

impl CellKind {
    pub fn symbol(&self) -> char {
        match self {
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Wall => '#',
            CellKind::Path => '*',
            CellKind::Empty => '.',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Editor<S: GridSolver = AstarSolver> {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    path: Path,
    mode: Mode,
    solver: S,
}

impl Editor<AstarSolver> {
    pub fn new(size: usize) -> Result<Self, GridError> {
        Editor::with_solver(size, AstarSolver::new())
    }
}

impl<S: GridSolver> Editor<S> {
    pub fn with_solver(size: usize, solver: S) -> Result<Self, GridError> {
        Ok(Editor {
            grid: Grid::new(size)?,
            start: None,
            end: None,
            path: Path::new(),
            mode: Mode::default(),
            solver,
        })
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    /// The last computed path. It is kept as is when walls change afterwards.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Applies a click at `point` according to the current mode and returns the new mode.
    /// Walls may also be toggled on the start or end cell.
    pub fn click(&mut self, point: Point) -> Result<Mode, GridError> {
        self.grid.get_ix(&point)?;
        match self.mode {
            Mode::PlacingStart => {
                self.start = Some(point);
                self.mode = Mode::PlacingEnd;
            }
            Mode::PlacingEnd => {
                self.end = Some(point);
                self.mode = Mode::PlacingWalls;
            }
            Mode::PlacingWalls => {
                let blocked = self.grid.toggle_wall(&point)?;
                debug!("Toggled wall at {} to {}", point, blocked);
            }
        }
        Ok(self.mode)
    }

    pub fn can_search(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Searches between the placed endpoints and stores the result, an empty path meaning that
    /// the end cannot be reached.
    pub fn calculate_path(&mut self) -> Result<&[Point], EditorError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(EditorError::MissingEndpoints);
        };
        self.grid.update();
        self.path = self.solver.find_path(&self.grid, start, end)?;
        Ok(&self.path)
    }

    /// Back to an empty, wall-free grid of the same size waiting for a start.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.start = None;
        self.end = None;
        self.path.clear();
        self.mode = Mode::PlacingStart;
    }

    /// Steps along the stored path, [None] if there is none.
    pub fn path_length(&self) -> Option<usize> {
        path_length(&self.path)
    }

    pub fn cell_kind(&self, point: &Point) -> Result<CellKind, GridError> {
        let is_wall = self.grid.is_wall(point)?;
        Ok(if self.start.as_ref() == Some(point) {
            CellKind::Start
        } else if self.end.as_ref() == Some(point) {
            CellKind::End
        } else if is_wall {
            CellKind::Wall
        } else if self.path.contains(point) {
            CellKind::Path
        } else {
            CellKind::Empty
        })
    }
}

impl<S: GridSolver> fmt::Display for Editor<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cell in self.grid.cells() {
            let point = cell.position();
            let kind = self.cell_kind(&point).map_err(|_| fmt::Error)?;
            write!(f, "{}", kind.symbol())?;
            if point.x as usize + 1 == self.grid.width() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

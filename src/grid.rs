use crate::error::GridError;
use crate::MAX_GRID_SIZE;
use core::fmt;
use grid_util::grid::{Grid as ValueGrid, SimpleGrid};
use grid_util::point::Point;
use log::{info, trace};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// A single location on the [Grid]. The position is fixed when the grid is built, the wall
/// flag is only changed through the owning grid so that its components stay consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    position: Point,
    is_wall: bool,
}

impl Cell {
    fn new(position: Point) -> Cell {
        Cell {
            position,
            is_wall: false,
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
}

/// [Grid] is a square map of [Cell]s kept in a row-major [SimpleGrid], so that a cell is
/// addressed by `y * size + x`. In addition to the wall flags it maintains information about
/// connected components using a [UnionFind] structure over the open cells, linked by
/// orthogonal adjacency. Blocking a cell may split a component, which cannot be tracked
/// incrementally, so that marks the components as dirty until [update](Self::update) or
/// [generate_components](Self::generate_components) is called.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: SimpleGrid<Cell>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a `size` x `size` grid without walls.
    pub fn new(size: usize) -> Result<Grid, GridError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        let mut cells = SimpleGrid::new(size, size, Cell::new(Point::new(0, 0)));
        for y in 0..size {
            for x in 0..size {
                cells.set(x, y, Cell::new(Point::new(x as i32, y as i32)));
            }
        }
        let mut grid = Grid {
            cells,
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }
    pub fn size(&self) -> usize {
        self.cells.width()
    }
    pub fn width(&self) -> usize {
        self.cells.width()
    }
    pub fn height(&self) -> usize {
        self.cells.height()
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        self.cells.point_in_bounds(*point)
    }
    /// Flat index of the cell at `point`.
    pub fn get_ix(&self, point: &Point) -> Result<usize, GridError> {
        if self.in_bounds(point) {
            Ok(self.cells.get_ix_point(point))
        } else {
            Err(GridError::OutOfBounds {
                position: *point,
                size: self.size(),
            })
        }
    }
    pub fn cell(&self, point: &Point) -> Result<Cell, GridError> {
        self.get_ix(point)?;
        Ok(self.cells.get_point(*point))
    }
    pub fn is_wall(&self, point: &Point) -> Result<bool, GridError> {
        self.cell(point).map(|cell| cell.is_wall)
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values.iter()
    }
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells()
            .filter(|cell| cell.is_wall)
            .map(|cell| cell.position)
    }
    pub(crate) fn cell_at(&self, ix: usize) -> Cell {
        self.cells.values[ix]
    }
    pub(crate) fn point_at(&self, ix: usize) -> Point {
        self.cell_at(ix).position
    }
    fn open(&self, point: Point) -> bool {
        self.cells.point_in_bounds(point) && !self.cells.get_point(point).is_wall
    }

    /// Indices of the open cells orthogonally adjacent to `ix`, in the order left, right, up,
    /// down. The wall flag of `ix` itself is not consulted.
    pub(crate) fn neighbour_ixs(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let Point { x, y } = self.point_at(ix);
        [
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x, y - 1),
            Point::new(x, y + 1),
        ]
        .into_iter()
        .filter(|&p| self.open(p))
        .map(|p| self.cells.get_ix_point(&p))
        .collect()
    }

    /// The in-bounds, non-wall cells orthogonally adjacent to `point`, ordered left, right, up,
    /// down. When several shortest paths exist this order decides which one a search returns.
    pub fn neighbors(&self, point: &Point) -> Result<SmallVec<[Cell; 4]>, GridError> {
        let ix = self.get_ix(point)?;
        Ok(self
            .neighbour_ixs(ix)
            .into_iter()
            .map(|n| self.cell_at(n))
            .collect())
    }

    /// Updates the wall flag at `point`. Joins newly connected components and flags the
    /// components as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, point: &Point, blocked: bool) -> Result<(), GridError> {
        let ix = self.get_ix(point)?;
        let mut cell = self.cells.get_point(*point);
        if cell.is_wall == blocked {
            return Ok(());
        }
        trace!("Setting wall at {} to {}", point, blocked);
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighbour_ixs(ix) {
                self.components.union(ix, n);
            }
        }
        cell.is_wall = blocked;
        self.cells.set_point(*point, cell);
        Ok(())
    }

    /// Flips the wall flag at `point` and returns the new value.
    pub fn toggle_wall(&mut self, point: &Point) -> Result<bool, GridError> {
        let blocked = !self.is_wall(point)?;
        self.set_wall(point, blocked)?;
        Ok(blocked)
    }

    /// Clears every wall, leaving a grid equivalent to a freshly created one of the same size.
    pub fn reset(&mut self) {
        for cell in self.cells.values.iter_mut() {
            cell.is_wall = false;
        }
        self.generate_components();
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Result<usize, GridError> {
        let ix = self.get_ix(point)?;
        Ok(self.components.find(ix))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Positions outside the grid are
    /// never reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix(start), self.get_ix(goal)) {
            (Ok(start_ix), Ok(goal_ix)) => !self.components.equiv(start_ix, goal_ix),
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let (w, h) = (self.cells.width(), self.cells.height());
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h {
            for x in 0..w {
                if self.cells.get(x, y).is_wall {
                    continue;
                }
                let ix = self.cells.get_ix(x, y);
                // Linking right and down is enough to cover every edge once
                for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                    if self.cells.index_in_bounds(nx, ny) && !self.cells.get(nx, ny).is_wall {
                        self.components.union(ix, self.cells.get_ix(nx, ny));
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let line = (0..self.width())
                .map(|x| if self.cells.get(x, y).is_wall { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the format written by [Display](fmt::Display): one row per line, `#` for a wall and
/// `.` for an open cell. Blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect::<Vec<_>>();
        let mut grid = Grid::new(rows.len())?;
        let size = grid.size();
        for (y, (line, row)) in rows.into_iter().enumerate() {
            let len = row.chars().count();
            if len != size {
                return Err(GridError::RaggedRow { line, len, size });
            }
            for (x, tile) in row.chars().enumerate() {
                match tile {
                    '#' => {
                        let mut cell = grid.cells.get(x, y);
                        cell.is_wall = true;
                        grid.cells.set(x, y, cell);
                    }
                    '.' => {}
                    _ => {
                        return Err(GridError::UnknownTile {
                            tile,
                            line,
                            column: x + 1,
                        })
                    }
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

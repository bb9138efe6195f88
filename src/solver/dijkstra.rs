use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{
    grid::Grid,
    solver::{neighbourhood_and_cost, GridSolver, SearchConfig},
};

/// Uniform cost search: A* with a zero heuristic. Expands more cells than [AstarSolver](super::astar::AstarSolver)
/// but relies on nothing but the move costs, which makes it a useful reference for path lengths.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub config: SearchConfig,
}

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(usize, i32); 4]>;

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, grid: &Grid, ix: usize) -> Self::Successors {
        neighbourhood_and_cost(grid, ix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn agrees_with_astar_on_length() {
        let grid: Grid = "\
            .....#..\n\
            .###.#..\n\
            ...#.#.#\n\
            ##.#....\n\
            ...####.\n\
            .#......\n\
            .#.####.\n\
            ...#...."
            .parse()
            .unwrap();
        let dijkstra = DijkstraSolver::default();
        let astar = AstarSolver::new();
        for (start, goal) in [
            (Point::new(0, 0), Point::new(7, 7)),
            (Point::new(0, 7), Point::new(7, 0)),
            (Point::new(4, 2), Point::new(0, 4)),
        ] {
            let reference = dijkstra.find_path(&grid, start, goal).unwrap();
            let path = astar.find_path(&grid, start, goal).unwrap();
            assert!(!path.is_empty());
            assert_eq!(path.len(), reference.len());
        }
    }

    #[test]
    fn zero_heuristic() {
        let solver = DijkstraSolver::default();
        assert_eq!(solver.heuristic(&Point::new(0, 0), &Point::new(9, 9)), 0);
    }
}

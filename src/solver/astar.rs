use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{
    grid::Grid,
    solver::{neighbourhood_and_cost, GridSolver, SearchConfig},
    STEP_COST,
};

/// A* with the Manhattan distance as heuristic, which is admissible and consistent for unit
/// cost orthogonal moves, so the first path found is a shortest one.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            config: SearchConfig::default(),
        }
    }
    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(usize, i32); 4]>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        p1.manhattan_distance(p2) * STEP_COST
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn successors(&self, grid: &Grid, ix: usize) -> Self::Successors {
        neighbourhood_and_cost(grid, ix)
    }
}

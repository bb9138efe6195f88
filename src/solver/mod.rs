use crate::astar::astar;
use crate::error::GridError;
use crate::grid::Grid;
use crate::{Path, STEP_COST};
use grid_util::point::Point;
use log::{debug, info};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// How a search treats a start or goal cell that is currently a wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndpointPolicy {
    /// The wall flags of the endpoints are not consulted. The search leaves a walled start
    /// through its open neighbours, and a walled goal is only reached when it equals the start.
    #[default]
    IgnoreWalls,
    /// A walled start or goal yields the empty path without searching.
    RejectWalls,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub endpoint_policy: EndpointPolicy,
    /// Answers searches between different connected components with the empty path up front.
    /// Only used while the grid's components are up to date.
    pub reachability_check: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            endpoint_policy: EndpointPolicy::IgnoreWalls,
            reachability_check: true,
        }
    }
}

pub trait GridSolver {
    type Successors: IntoIterator<Item = (usize, i32)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn config(&self) -> &SearchConfig;

    /// Open cells reachable in one step from the cell at flat index `ix`, with their move cost.
    fn successors(&self, grid: &Grid, ix: usize) -> Self::Successors;

    /// Computes a shortest path from `start` to `goal`, both included. An unreachable goal
    /// gives the empty path; positions outside the grid are rejected.
    fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Result<Path, GridError> {
        let start_ix = grid.get_ix(&start)?;
        let goal_ix = grid.get_ix(&goal)?;
        let config = self.config();
        let walled_endpoint = grid.cell_at(start_ix).is_wall() || grid.cell_at(goal_ix).is_wall();
        if walled_endpoint && config.endpoint_policy == EndpointPolicy::RejectWalls {
            info!("{} or {} is a wall, not searching", start, goal);
            return Ok(Path::new());
        }
        // Component membership says nothing about walled cells, which sit in their own
        // component but can still be left or entered by the search.
        if config.reachability_check
            && !walled_endpoint
            && !grid.components_dirty()
            && grid.unreachable(&start, &goal)
        {
            info!("{} is not reachable from {}", goal, start);
            return Ok(Path::new());
        }
        debug!("Computing path from {} to {}", start, goal);
        let path: Path = astar(
            &start_ix,
            |&ix| self.successors(grid, ix),
            |&ix| self.heuristic(&grid.point_at(ix), &goal),
            |&ix| ix == goal_ix,
        )
        .map(|(ixs, _cost)| ixs.into_iter().map(|ix| grid.point_at(ix)).collect())
        .unwrap_or_default();
        Ok(path)
    }
}

/// The four-neighbourhood of `ix` at uniform cost, shared by the solvers.
pub(crate) fn neighbourhood_and_cost(grid: &Grid, ix: usize) -> SmallVec<[(usize, i32); 4]> {
    grid.neighbour_ixs(ix)
        .into_iter()
        .map(|n| (n, STEP_COST))
        .collect()
}

use route_optimizer::grid::Grid;
use route_optimizer::solver::{astar::AstarSolver, GridSolver};
use route_optimizer::{path_length, Point};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Moves are restricted to the 4-neighborhood

fn main() {
    let mut grid = Grid::new(3).unwrap();
    grid.toggle_wall(&Point::new(1, 1)).unwrap();
    print!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let solver = AstarSolver::new();
    let path = solver.find_path(&grid, start, end).unwrap();
    println!("Path:");
    for p in &path {
        println!("{:?}", p);
    }
    if let Some(steps) = path_length(&path) {
        println!("Path length: {} steps", steps);
    }
}

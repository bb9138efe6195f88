use route_optimizer::{
    find_path,
    grid::Grid,
    is_contiguous, path_length,
    solver::{astar::AstarSolver, GridSolver},
    Point,
};

fn all_points(grid: &Grid) -> Vec<Point> {
    grid.cells().map(|cell| cell.position()).collect()
}

/// On a grid without walls every path is as long as the Manhattan distance.
#[test]
fn open_grid_paths_are_optimal() {
    let grid = Grid::new(6).unwrap();
    let points = all_points(&grid);
    for start in &points {
        for end in &points {
            let path = find_path(*start, *end, &grid).unwrap();
            assert_eq!(path.len() as i32, start.manhattan_distance(end) + 1);
            assert!(is_contiguous(&path));
        }
    }
}

#[test]
fn identity_path() {
    let grid: Grid = "..#\n.#.\n...".parse().unwrap();
    for p in all_points(&grid) {
        assert_eq!(find_path(p, p, &grid).unwrap(), vec![p]);
    }
}

#[test]
fn five_by_five_corner_to_corner() {
    let grid = Grid::new(5).unwrap();
    let path = find_path(Point::new(0, 0), Point::new(4, 4), &grid).unwrap();
    assert_eq!(path.len(), 9);
    assert_eq!(path_length(&path), Some(8));
}

#[test]
fn sealed_middle_row() {
    let mut grid = Grid::new(3).unwrap();
    for x in 0..3 {
        grid.toggle_wall(&Point::new(x, 1)).unwrap();
    }
    let path = find_path(Point::new(0, 0), Point::new(2, 2), &grid).unwrap();
    assert!(path.is_empty());
    assert_eq!(path_length(&path), None);
    grid.update();
    assert!(find_path(Point::new(0, 0), Point::new(2, 2), &grid)
        .unwrap()
        .is_empty());
}

/// Toggling a wall on and off again gives the same answers as the untouched grid.
#[test]
fn toggle_round_trip_restores_paths() {
    let original = Grid::new(4).unwrap();
    let mut grid = original.clone();
    let solver = AstarSolver::new();
    for wall in all_points(&grid) {
        grid.toggle_wall(&wall).unwrap();
        grid.toggle_wall(&wall).unwrap();
        grid.update();
        for end in all_points(&grid) {
            let start = Point::new(0, 0);
            assert_eq!(
                solver.find_path(&grid, start, end).unwrap(),
                solver.find_path(&original, start, end).unwrap()
            );
        }
    }
    assert_eq!(grid.to_string(), original.to_string());
}

#[test]
fn paths_avoid_walls() {
    let grid: Grid = "\
        ......\n\
        .####.\n\
        .#..#.\n\
        .#.##.\n\
        .#....\n\
        .#####"
        .parse()
        .unwrap();
    let start = Point::new(0, 5);
    let end = Point::new(2, 2);
    let path = find_path(start, end, &grid).unwrap();
    assert!(is_contiguous(&path));
    assert!(path.iter().all(|p| !grid.is_wall(p).unwrap()));
    // Up the left column, across the top, down the right column and in through the bottom gap
    assert_eq!(path.len(), 20);
}

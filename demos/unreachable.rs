use route_optimizer::grid::Grid;
use route_optimizer::{find_path, Point};

// The wall column cuts the map in two, so no path exists:
// ..#..
// ..#..
// ..#..
// ..#..
// ..#..
fn main() {
    let grid: Grid = "..#..\n..#..\n..#..\n..#..\n..#..".parse().unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    println!("Same component: {}", grid.reachable(&start, &end));
    let path = find_path(start, end, &grid).unwrap();
    if path.is_empty() {
        println!("No path from {} to {}", start, end);
    }
}

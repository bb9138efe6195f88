use route_optimizer::editor::Editor;
use route_optimizer::{Point, DEFAULT_GRID_SIZE};

// Replays a sequence of clicks as an interactive front end would: start, end, then a wall
// with a single gap that the route has to pass through.
fn main() {
    let mut editor = Editor::new(DEFAULT_GRID_SIZE).unwrap();
    println!("Mode: {}", editor.mode());
    editor.click(Point::new(2, 2)).unwrap();
    editor.click(Point::new(17, 17)).unwrap();
    for y in 0..DEFAULT_GRID_SIZE as i32 {
        if y != 15 {
            editor.click(Point::new(10, y)).unwrap();
        }
    }
    println!("Mode: {}", editor.mode());
    editor.calculate_path().unwrap();
    print!("{}", editor);
    match editor.path_length() {
        Some(steps) => println!("Path length: {} steps", steps),
        None => println!("No path"),
    }
    editor.reset();
    println!("After reset, mode: {}", editor.mode());
}

//! Classic filled turtle star.
//!
//! Run with:
//! `cargo run -p quill_turtle --example star`

use quill_paint::Canvas;
use quill_turtle::Turtle;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let canvas = Canvas::new("c", 400.0, 300.0);
    let mut turtle = Turtle::new(&canvas);

    turtle.color("orange", "yellow");
    turtle.pen_size(3.0);

    turtle.goto(150.0, 50.0);

    turtle.begin_fill();
    for _ in 0..5 {
        turtle.forward(100.0);
        turtle.right(144.0);
    }
    turtle.end();

    // Hand the recorded frame to stdout in place of a real renderer.
    for command in canvas.take_commands() {
        println!("{command:?}");
    }
}

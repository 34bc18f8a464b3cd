//! Constellation: gold stars joined by a polyline.
//!
//! Non-interactive take on the pointer-driven demo: a fixed sequence of
//! "click" positions stands in for mouse input, and every frame clears the
//! surface and redraws all stars before stroking the connecting line.
//!
//! Run with:
//! `cargo run -p quill_turtle --example constellation`

use quill_paint::{Canvas, LineCap, LineJoin};
use quill_turtle::Turtle;

const STARS: [(f32, f32); 4] = [
    (60.0, 80.0),
    (180.0, 40.0),
    (300.0, 120.0),
    (240.0, 220.0),
];

fn draw_stars(turtle: &mut Turtle) {
    turtle.color("orange", "gold");
    for &(x, y) in &STARS {
        turtle.goto(x, y);
        turtle.rotation(-72.0);

        turtle.begin_fill();
        for _ in 0..5 {
            turtle.forward(50.0);
            turtle.right(144.0);
        }
        turtle.end();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let canvas = Canvas::new("c", 480.0, 320.0);
    let mut stars = Turtle::new(&canvas);
    let mut lines = Turtle::new(&canvas);

    stars.pen_size(3.0);
    stars.pen_cap(LineCap::Round, Some(LineJoin::Round));

    lines.color("gold", "transparent");
    lines.pen_size(5.0);

    canvas.clear();
    draw_stars(&mut stars);

    // Connect the stars by heading and distance rather than goto, the way
    // the turtle would actually walk it.
    lines.goto(STARS[0].0, STARS[0].1 + 25.0);
    lines.begin_stroke();
    let mut last: Option<(f32, f32)> = None;
    for &(x, y) in &STARS {
        if let Some((lx, ly)) = last {
            let angle = -((y - ly) / (x - lx)).atan().to_degrees();
            let distance = ((x - lx).powi(2) + (y - ly).powi(2)).sqrt();
            lines.rotation(angle);
            lines.forward(if x < lx { -distance } else { distance });
        }
        last = Some((x, y));
    }
    lines.end();

    draw_stars(&mut stars);

    let commands = canvas.take_commands();
    println!("recorded {} paint commands", commands.len());
    for command in &commands {
        println!("{command:?}");
    }
}

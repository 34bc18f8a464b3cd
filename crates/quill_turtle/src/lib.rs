//! Turtle cursor
//!
//! A drawing cursor with position, heading, and pen state that accumulates
//! vector paths on a shared [`Canvas`] and commits them as stroked or
//! filled shapes.
//!
//! The cursor is a small state machine over its pen mode:
//! - movement calls always update the position and append exactly one path
//!   command (`MoveTo` while the pen is up, `LineTo` while a stroke or fill
//!   is open);
//! - appearance setters mutate state only; nothing renders before [`end`];
//! - [`end`] pushes the pen description to the canvas, records the
//!   fill/stroke commands for the accumulated path, and starts a fresh path
//!   at the cursor's current position.
//!
//! [`end`]: Turtle::end

use std::f32::consts::FRAC_PI_2;
use std::mem;

use quill_paint::{Canvas, Color, LineCap, LineJoin, Path, PenStyle, Point};

/// Whether movement extends a visible path, and how the path is committed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PenMode {
    /// Pen up: movement repositions without drawing.
    #[default]
    None,
    /// Movement extends a path committed as a stroke.
    Stroke,
    /// Movement extends a path committed as a fill (plus its outline).
    Fill,
}

/// A turtle-graphics cursor bound to one [`Canvas`] for its lifetime.
///
/// Any number of turtles may share a canvas; their commits interleave in
/// call order.
pub struct Turtle<'c> {
    canvas: &'c Canvas,
    position: Point,
    heading: f32,
    pen: PenMode,
    fill_color: Color,
    stroke_color: Color,
    pen_width: f32,
    pen_cap: LineCap,
    pen_join: LineJoin,
    path: Path,
    committed: Vec<Path>,
}

fn normalize_degrees(degrees: f32) -> f32 {
    ((degrees % 360.0) + 360.0) % 360.0
}

impl<'c> Turtle<'c> {
    /// Create a turtle at the origin, heading 0, pen up, bound to `canvas`.
    pub fn new(canvas: &'c Canvas) -> Self {
        tracing::debug!(canvas = canvas.name(), "turtle connected");

        let mut path = Path::new();
        path.move_to(Point::ZERO);

        Self {
            canvas,
            position: Point::ZERO,
            heading: 0.0,
            pen: PenMode::None,
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            pen_width: 1.0,
            pen_cap: LineCap::Butt,
            pen_join: LineJoin::Miter,
            path,
            committed: Vec::new(),
        }
    }

    // === Movement ===

    /// Move forward along the current heading.
    ///
    /// Extends the current path with a line segment when a stroke or fill
    /// is open, and with an invisible repositioning move otherwise.
    pub fn forward(&mut self, distance: f32) {
        let (sin, cos) = (self.heading + FRAC_PI_2).sin_cos();
        let target = Point::new(
            self.position.x + sin * distance,
            self.position.y + cos * distance,
        );
        self.reach(target);
    }

    /// Move backward along the current heading.
    pub fn backward(&mut self, distance: f32) {
        self.forward(-distance);
    }

    /// Move straight to a position. Heading is neither read nor changed.
    pub fn goto(&mut self, x: f32, y: f32) {
        self.reach(Point::new(x, y));
    }

    /// Move to the origin and reset the heading. The current path and pen
    /// mode are untouched.
    pub fn home(&mut self) {
        self.goto(0.0, 0.0);
        self.heading = 0.0;
    }

    /// Turn right by `degrees`.
    pub fn right(&mut self, degrees: f32) {
        self.heading -= degrees.to_radians();
    }

    /// Turn left by `degrees`.
    pub fn left(&mut self, degrees: f32) {
        self.heading += degrees.to_radians();
    }

    /// Set the heading absolutely, in degrees normalized to [0, 360).
    pub fn rotation(&mut self, degrees: f32) {
        self.heading = normalize_degrees(degrees).to_radians();
    }

    // === Pen lifecycle ===

    /// Start a stroked path. Subsequent movement draws line segments.
    pub fn begin_stroke(&mut self) {
        self.pen = PenMode::Stroke;
    }

    /// Start a filled path. Segments are recorded exactly as for a stroke;
    /// the difference is what happens at [`end`](Turtle::end).
    pub fn begin_fill(&mut self) {
        self.pen = PenMode::Fill;
    }

    /// Commit the accumulated path.
    ///
    /// Pushes the current pen description to the canvas, then records a
    /// stroke (pen mode [`Stroke`]) or a fill plus its outline stroke (pen
    /// mode [`Fill`]). With the pen up this renders nothing. Either way the
    /// pen resets to up, the finished path joins the committed history, and
    /// a fresh path starts at the current position.
    ///
    /// [`Stroke`]: PenMode::Stroke
    /// [`Fill`]: PenMode::Fill
    pub fn end(&mut self) {
        self.canvas.apply_pen(PenStyle {
            fill: self.fill_color,
            stroke: self.stroke_color,
            width: self.pen_width,
            cap: self.pen_cap,
            join: self.pen_join,
        });

        match self.pen {
            PenMode::Stroke => self.canvas.stroke_path(&self.path),
            PenMode::Fill => {
                // A fill always draws its outline too.
                self.canvas.fill_path(&self.path);
                self.canvas.stroke_path(&self.path);
            }
            PenMode::None => {}
        }

        tracing::debug!(
            mode = ?self.pen,
            segments = self.path.line_count(),
            "path committed"
        );

        self.pen = PenMode::None;
        let mut fresh = Path::new();
        fresh.move_to(self.position);
        self.committed.push(mem::replace(&mut self.path, fresh));
    }

    // === Appearance ===

    /// Set stroke and fill colors in one call. Takes effect at the next
    /// [`end`](Turtle::end). Pass `"transparent"` as `fill` for a
    /// stroke-only look.
    pub fn color(&mut self, stroke: impl Into<Color>, fill: impl Into<Color>) {
        self.stroke_color = stroke.into();
        self.fill_color = fill.into();
    }

    /// Set the line width for subsequent commits.
    pub fn pen_size(&mut self, size: f32) {
        self.pen_width = size;
    }

    /// Set the line-cap style; the join style is updated only if provided.
    pub fn pen_cap(&mut self, cap: LineCap, join: Option<LineJoin>) {
        self.pen_cap = cap;
        if let Some(join) = join {
            self.pen_join = join;
        }
    }

    // === Accessors ===

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Current heading in radians.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn pen(&self) -> PenMode {
        self.pen
    }

    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }

    /// The in-progress path (movement history since the last commit).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Committed paths, oldest first. Append-only; never re-rendered
    /// automatically.
    pub fn paths(&self) -> &[Path] {
        &self.committed
    }

    fn reach(&mut self, target: Point) {
        if self.pen == PenMode::None {
            self.path.move_to(target);
        } else {
            self.path.line_to(target);
        }
        self.position = target;
    }
}

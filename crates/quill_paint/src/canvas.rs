//! The drawing surface: a command-recording canvas

use std::cell::{Ref, RefCell};

use crate::color::Color;
use crate::path::Path;
use crate::pen::{PenStyle, StrokeStyle};
use crate::primitives::Rect;

/// A paint command for the host renderer
#[derive(Clone, Debug)]
pub enum PaintCommand {
    /// Disable smoothing/interpolation for crisp pixel output.
    SetPixelated,
    Clear {
        rect: Rect,
    },
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
}

/// Construction options for a [`Canvas`]
#[derive(Clone, Copy, Debug)]
pub struct CanvasOptions {
    pub pixelate: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self { pixelate: true }
    }
}

/// A named drawable region that records draw calls instead of rasterizing.
///
/// The canvas holds the active pen description and an ordered command
/// queue. Cursors draw through a shared `&Canvas` (the drawing model is
/// single-threaded and synchronous, so interior mutability is a `RefCell`,
/// not a lock); the host renderer drains the queue with [`take_commands`]
/// and executes it against a real surface.
///
/// [`take_commands`]: Canvas::take_commands
pub struct Canvas {
    name: String,
    bounds: Rect,
    pixelate: bool,
    pen: RefCell<PenStyle>,
    commands: RefCell<Vec<PaintCommand>>,
}

impl Canvas {
    /// Create a canvas bound to a named region with default options.
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self::with_options(name, width, height, CanvasOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        width: f32,
        height: f32,
        options: CanvasOptions,
    ) -> Self {
        let name = name.into();
        tracing::debug!(%name, width, height, pixelate = options.pixelate, "canvas created");

        let mut commands = Vec::new();
        if options.pixelate {
            commands.push(PaintCommand::SetPixelated);
        }

        Self {
            name,
            bounds: Rect::new(0.0, 0.0, width, height),
            pixelate: options.pixelate,
            pen: RefCell::new(PenStyle::default()),
            commands: RefCell::new(commands),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn pixelated(&self) -> bool {
        self.pixelate
    }

    /// The active pen description.
    pub fn pen(&self) -> PenStyle {
        *self.pen.borrow()
    }

    /// Set the pen description used by subsequent fill/stroke commands.
    pub fn apply_pen(&self, pen: PenStyle) {
        tracing::trace!(?pen, "pen applied");
        *self.pen.borrow_mut() = pen;
    }

    /// Erase the whole region. Previously committed cursor paths are not
    /// replayed; callers redraw explicitly.
    pub fn clear(&self) {
        self.commands.borrow_mut().push(PaintCommand::Clear {
            rect: self.bounds,
        });
    }

    /// Record a fill of `path` with the active fill color.
    ///
    /// Paths without a single line segment draw nothing and are skipped.
    pub fn fill_path(&self, path: &Path) {
        if !path.has_lines() {
            tracing::debug!("skipping fill of degenerate path");
            return;
        }
        let color = self.pen.borrow().fill;
        self.commands.borrow_mut().push(PaintCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    /// Record a stroke of `path` with the active stroke description.
    pub fn stroke_path(&self, path: &Path) {
        if !path.has_lines() {
            tracing::debug!("skipping stroke of degenerate path");
            return;
        }
        let style = self.pen.borrow().stroke_style();
        self.commands.borrow_mut().push(PaintCommand::StrokePath {
            path: path.clone(),
            style,
        });
    }

    /// Inspect the recorded commands without draining them.
    pub fn commands(&self) -> Ref<'_, [PaintCommand]> {
        Ref::map(self.commands.borrow(), |c| c.as_slice())
    }

    pub fn command_count(&self) -> usize {
        self.commands.borrow().len()
    }

    /// Drain the recorded commands for the host renderer.
    pub fn take_commands(&self) -> Vec<PaintCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Point;

    fn line_path() -> Path {
        let mut path = Path::new();
        path.move_to(Point::ZERO);
        path.line_to(Point::new(10.0, 0.0));
        path
    }

    #[test]
    fn pixelate_option_is_recorded_first() {
        let canvas = Canvas::new("c", 100.0, 100.0);
        assert!(canvas.pixelated());
        assert!(matches!(canvas.commands()[0], PaintCommand::SetPixelated));

        let plain = Canvas::with_options("c", 100.0, 100.0, CanvasOptions { pixelate: false });
        assert!(!plain.pixelated());
        assert_eq!(plain.command_count(), 0);
    }

    #[test]
    fn stroke_snapshots_active_pen() {
        let canvas = Canvas::with_options("c", 100.0, 100.0, CanvasOptions { pixelate: false });
        canvas.apply_pen(PenStyle {
            stroke: Color::RED,
            width: 3.0,
            ..PenStyle::default()
        });
        canvas.stroke_path(&line_path());

        // Later pen changes must not affect already-recorded commands.
        canvas.apply_pen(PenStyle::default());

        let commands = canvas.take_commands();
        match &commands[0] {
            PaintCommand::StrokePath { style, .. } => {
                assert_eq!(style.color, Color::RED);
                assert_eq!(style.width, 3.0);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_paths_are_skipped() {
        let canvas = Canvas::with_options("c", 100.0, 100.0, CanvasOptions { pixelate: false });

        let mut moves_only = Path::new();
        moves_only.move_to(Point::ZERO);
        moves_only.move_to(Point::new(5.0, 5.0));

        canvas.fill_path(&moves_only);
        canvas.stroke_path(&moves_only);
        canvas.fill_path(&Path::new());

        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn clear_covers_the_whole_region() {
        let canvas = Canvas::with_options("c", 320.0, 240.0, CanvasOptions { pixelate: false });
        canvas.clear();

        let commands = canvas.commands();
        match commands[0] {
            PaintCommand::Clear { rect } => {
                assert_eq!(rect, canvas.bounds());
                assert_eq!(rect, Rect::new(0.0, 0.0, 320.0, 240.0));
            }
            ref other => panic!("expected clear, got {other:?}"),
        }
    }

    #[test]
    fn take_commands_drains_the_queue() {
        let canvas = Canvas::with_options("c", 100.0, 100.0, CanvasOptions { pixelate: false });
        canvas.clear();
        canvas.stroke_path(&line_path());

        assert_eq!(canvas.take_commands().len(), 2);
        assert_eq!(canvas.command_count(), 0);
    }
}

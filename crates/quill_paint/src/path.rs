//! Path building and representation

use smallvec::SmallVec;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// A 2D path composed of move/line commands.
///
/// Paths are built incrementally: a cursor appends one command per movement
/// call, so the mutators take `&mut self` rather than consuming the path.
#[derive(Clone, Debug, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of visible line segments in the path.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count()
    }

    /// Whether stroking or filling this path can produce any output.
    /// A path of only `MoveTo`s (pen-up repositioning) draws nothing.
    pub fn has_lines(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, PathCommand::LineTo(_)))
    }

    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// Builder for constructing paths in one expression
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.move_to(point);
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.line_to(point);
        self.current = point;
        self
    }

    pub fn close(mut self) -> Self {
        self.path.close();
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_path_records_one_command_per_call() {
        let mut path = Path::new();
        path.move_to(Point::ZERO);
        path.line_to(Point::new(10.0, 0.0));
        path.move_to(Point::new(20.0, 20.0));
        path.line_to(Point::new(30.0, 20.0));

        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.line_count(), 2);
        assert!(path.has_lines());
    }

    #[test]
    fn move_only_path_has_no_lines() {
        let mut path = Path::new();
        path.move_to(Point::ZERO);
        path.move_to(Point::new(5.0, 5.0));

        assert!(!path.is_empty());
        assert!(!path.has_lines());
        assert_eq!(path.line_count(), 0);
    }

    #[test]
    fn builder_matches_incremental() {
        let built = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(1.0, 2.0)
            .close()
            .build();

        assert_eq!(
            built.commands(),
            &[
                PathCommand::MoveTo(Point::ZERO),
                PathCommand::LineTo(Point::new(1.0, 2.0)),
                PathCommand::Close,
            ]
        );
    }
}

//! Pen descriptions: stroke styles, caps, and joins

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke style snapshotted into each stroke command
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

/// The full pen description a cursor pushes to the surface at commit time:
/// fill color, stroke color, line width, cap, and join.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenStyle {
    pub fill: Color,
    pub stroke: Color,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl PenStyle {
    /// The stroke half of the pen description.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke,
            width: self.width,
            line_cap: self.cap,
            line_join: self.join,
        }
    }
}

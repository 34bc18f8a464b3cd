//! Quill paint surface
//!
//! The surface half of the turtle-graphics API: vector paths, colors, pen
//! descriptions, and a command-recording canvas. The canvas never
//! rasterizes anything; it records an ordered [`PaintCommand`] queue that a
//! host renderer drains with [`Canvas::take_commands`].
//!
//! # Features
//!
//! - Path building (move/line segments, incremental or chained)
//! - Colors, including CSS color strings
//! - Pen descriptions (fill, stroke, width, cap, join)
//! - A recording drawing surface shared by any number of cursors

pub mod canvas;
pub mod color;
pub mod path;
pub mod pen;
pub mod primitives;

pub use canvas::{Canvas, CanvasOptions, PaintCommand};
pub use color::Color;
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use pen::{LineCap, LineJoin, PenStyle, StrokeStyle};
pub use primitives::Rect;

//! Paint operations: the seam between widgets and a host's graphics backend.
//!
//! Widgets describe what they draw through the [`Renderer`] trait; the host
//! implements it on whatever backend it has (GPU, software raster, a test
//! recorder). This keeps the widget layer free of any particular graphics
//! stack.

use crate::text::Font;
use crate::types::{Color, Path, Point, Rect};

/// Stroke style for outlined shapes and lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical units.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Drawing operations a host backend provides to widgets.
///
/// All coordinates are in the host's logical coordinate space; widgets pass
/// window-space geometry. Implementations are expected to draw immediately or
/// record the ops for a later pass; widgets make no assumption either way.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Fill a closed path with a solid color.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Draw a single line of text with its top-left corner at `origin`.
    ///
    /// The caller is responsible for eliding text that would overflow its
    /// slot; the renderer draws the string as given.
    fn draw_text(&mut self, text: &str, font: &Font, origin: Point, color: Color);
}

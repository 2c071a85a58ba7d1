//! Render primitives for Cascade.
//!
//! This crate holds everything the widget layer needs to describe what it
//! draws without binding to a particular graphics backend:
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rect`], and a small [`Path`] type
//!   that supports rotation (the indicator glyph is a rotated path)
//! - **Color**: premultiplied RGBA [`Color`] with interpolation helpers
//! - **Paint ops**: the [`Renderer`] trait a host backend implements
//! - **Text**: [`Font`] plus measurement via the [`TextMeasure`] trait, with
//!   a shaping implementation backed by `cosmic-text`

pub mod error;
pub mod paint;
pub mod text;
pub mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{Renderer, Stroke};
pub use text::{FixedAdvanceMeasure, Font, FontFamily, ShapedTextMeasure, TextMeasure};
pub use types::{Color, Path, PathCommand, Point, Rect, Size};

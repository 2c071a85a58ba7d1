//! Font representation and text measurement.
//!
//! Layout code needs to know how wide a run of text will render before
//! anything is drawn — title slots clamp to the measured width, and the
//! indicator glyph sits just past the title's right edge. Measurement goes
//! through the [`TextMeasure`] trait so the math stays deterministic under
//! test; the production implementation, [`ShapedTextMeasure`], shapes with
//! `cosmic-text`.

use parking_lot::Mutex;

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// Font family selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// The platform's default sans-serif face.
    #[default]
    SansSerif,
    /// The platform's default serif face.
    Serif,
    /// The platform's default monospace face.
    Monospace,
    /// A specific named family.
    Name(String),
}

/// A font: family plus point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
}

impl Font {
    /// Line height multiplier applied over the point size.
    const LINE_HEIGHT_FACTOR: f32 = 1.2;

    /// Create a new font.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    /// The font's point size.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font's family.
    #[inline]
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// The line height for this font.
    #[inline]
    pub fn line_height(&self) -> f32 {
        self.size * Self::LINE_HEIGHT_FACTOR
    }

    /// Convert to cosmic-text attributes.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        let family = match &self.family {
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
        };
        cosmic_text::Attrs::new().family(family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 14.0)
    }
}

/// Measures the rendered size of a single-style text run.
pub trait TextMeasure: Send + Sync {
    /// Measure `text` rendered with `font`, wrapping at `max_width`.
    ///
    /// Returns the tight size of the laid-out text. An empty string measures
    /// zero width and one line height tall.
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> Size;
}

/// Text measurement backed by `cosmic-text` shaping.
pub struct ShapedTextMeasure {
    font_system: Mutex<cosmic_text::FontSystem>,
}

impl ShapedTextMeasure {
    /// Create a measurer over the system font database.
    ///
    /// Fails with [`RenderError::NoFontsAvailable`] when no font faces can be
    /// found (headless environments without installed fonts).
    pub fn new() -> RenderResult<Self> {
        let font_system = cosmic_text::FontSystem::new();
        if font_system.db().faces().next().is_none() {
            return Err(RenderError::NoFontsAvailable);
        }
        tracing::debug!(
            target: "cascade_render::text",
            face_count = font_system.db().faces().count(),
            "font system initialized"
        );
        Ok(Self {
            font_system: Mutex::new(font_system),
        })
    }
}

impl TextMeasure for ShapedTextMeasure {
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> Size {
        if text.is_empty() {
            return Size::new(0.0, font.line_height());
        }

        let mut font_system = self.font_system.lock();
        let metrics = cosmic_text::Metrics::new(font.size(), font.line_height());
        let mut buffer = cosmic_text::Buffer::new(&mut font_system, metrics);
        buffer.set_size(&mut font_system, Some(max_width), None);
        buffer.set_text(
            &mut font_system,
            text,
            font.to_attrs(),
            cosmic_text::Shaping::Advanced,
        );

        let mut width: f32 = 0.0;
        let mut line_count = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            line_count += 1;
        }
        Size::new(width, line_count.max(1) as f32 * metrics.line_height)
    }
}

/// Approximate measurement with a fixed advance per character.
///
/// A stand-in for environments without fonts and for deterministic tests:
/// every character advances by `size × factor`. Not suitable for display
/// layout against real glyphs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    factor: f32,
}

impl FixedAdvanceMeasure {
    /// Create a measurer with the given advance factor.
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, text: &str, font: &Font, max_width: f32) -> Size {
        let raw = text.chars().count() as f32 * font.size() * self.factor;
        let lines = if max_width > 0.0 {
            (raw / max_width).ceil().max(1.0)
        } else {
            1.0
        };
        Size::new(raw.min(max_width), lines * font.line_height())
    }
}

//! Per-column visuals: background plate, title label, indicator glyph.
//!
//! All geometry here is in strip-local coordinates. The menu rebuilds the
//! whole set of [`ColumnVisual`]s whenever its model changes; there is no
//! incremental patching.

use std::f32::consts::PI;

use cascade_render::{Path, Point, Rect, Size, TextMeasure};
use unicode_segmentation::UnicodeSegmentation;

use super::theme::MenuTheme;

/// Maximum width a title is measured against before clamping to its slot.
pub(crate) const MEASURE_MAX_WIDTH: f32 = 280.0;

/// Horizontal gap between the title's right edge and the indicator glyph.
const INDICATOR_GAP: f32 = 8.0;

/// Reserved width inside a slot that a title may not grow into, so the
/// indicator never overlaps the title.
const TITLE_CLAMP_MARGIN: f32 = 25.0;

/// Indicator glyph dimensions: a downward triangle spanning 8×5 units.
const INDICATOR_WIDTH: f32 = 8.0;
const INDICATOR_HEIGHT: f32 = 5.0;

/// Indicator rotation when its column is open.
pub(crate) const INDICATOR_OPEN_ROTATION: f32 = PI;

/// Clamp a measured title width to its column slot.
///
/// Titles render at their natural width unless that would intrude on the
/// indicator's reserved margin.
pub(crate) fn clamp_title_width(measured: f32, slot_width: f32) -> f32 {
    measured.min((slot_width - TITLE_CLAMP_MARGIN).max(0.0))
}

/// Elide `text` so it measures within `max_width`, cutting at grapheme
/// boundaries and appending an ellipsis.
///
/// Returns the text unchanged when it already fits.
pub(crate) fn elide_to_width(
    text: &str,
    font: &cascade_render::Font,
    max_width: f32,
    measure: &dyn TextMeasure,
) -> String {
    if measure.measure(text, font, MEASURE_MAX_WIDTH).width <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "\u{2026}";
    let mut best = ELLIPSIS.to_string();
    let mut prefix = String::new();
    for grapheme in text.graphemes(true) {
        prefix.push_str(grapheme);
        let candidate = format!("{prefix}{ELLIPSIS}");
        if measure.measure(&candidate, font, MEASURE_MAX_WIDTH).width > max_width {
            break;
        }
        best = candidate;
    }
    best
}

/// The visual triple for one column: plate, title, indicator.
#[derive(Debug, Clone)]
pub struct ColumnVisual {
    /// Background plate rect, strip-local.
    plate: Rect,
    /// Current title text.
    title: String,
    /// Center of the title label.
    title_center: Point,
    /// Clamped rendered size of the title.
    title_size: Size,
    /// Center of the indicator glyph.
    indicator_center: Point,
    /// Pinned logical rotation: 0 when closed, π when open.
    rotation: f32,
    /// Whether the plate shows the open highlight.
    highlighted: bool,
}

impl ColumnVisual {
    /// Lay out the visual triple for column `index` of `count` across a strip
    /// of the given size.
    pub fn layout(
        index: usize,
        count: usize,
        strip: Size,
        title: String,
        theme: &MenuTheme,
        measure: &dyn TextMeasure,
    ) -> Self {
        let slot_width = strip.width / count as f32;
        let title_interval = strip.width / (count as f32 * 2.0);
        let center_y = strip.height / 2.0;

        let plate = Rect::from_center(
            Point::new((index as f32 + 0.5) * slot_width, center_y),
            Size::new(slot_width, strip.height - 1.0),
        );

        let title_center = Point::new((index as f32 * 2.0 + 1.0) * title_interval, center_y);
        let measured = measure.measure(&title, &theme.font, MEASURE_MAX_WIDTH);
        let title_size = Size::new(clamp_title_width(measured.width, slot_width), measured.height);

        let mut visual = Self {
            plate,
            title,
            title_center,
            title_size,
            indicator_center: Point::ZERO,
            rotation: 0.0,
            highlighted: false,
        };
        visual.reposition_indicator();
        visual
    }

    /// The unit indicator glyph: a filled downward triangle at the origin.
    pub fn indicator_glyph() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(INDICATOR_WIDTH, 0.0))
            .line_to(Point::new(INDICATOR_WIDTH / 2.0, INDICATOR_HEIGHT))
            .close();
        path
    }

    /// The indicator path placed at its strip position, rotated by
    /// `displayed_rotation` radians about the glyph center.
    pub fn indicator_path(&self, displayed_rotation: f32) -> Path {
        Self::indicator_glyph()
            .translated(
                self.indicator_center.x - INDICATOR_WIDTH / 2.0,
                self.indicator_center.y - INDICATOR_HEIGHT / 2.0,
            )
            .rotated(displayed_rotation, self.indicator_center)
    }

    /// Move the indicator to sit just past the title's right edge.
    ///
    /// Called after the title changes width so the glyph tracks the label.
    pub fn reposition_indicator(&mut self) {
        self.indicator_center = Point::new(
            self.title_center.x + self.title_size.width / 2.0 + INDICATOR_GAP,
            self.title_center.y,
        );
    }

    /// Replace the title and re-clamp its rendered size.
    ///
    /// The caller is responsible for calling [`reposition_indicator`] when
    /// the indicator should track the new width.
    pub fn set_title(&mut self, title: String, theme: &MenuTheme, measure: &dyn TextMeasure) {
        let measured = measure.measure(&title, &theme.font, MEASURE_MAX_WIDTH);
        self.title_size = Size::new(
            clamp_title_width(measured.width, self.plate.width()),
            measured.height,
        );
        self.title = title;
    }

    /// The background plate rect.
    #[inline]
    pub fn plate(&self) -> Rect {
        self.plate
    }

    /// The current title text.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title's rendered rect.
    pub fn title_rect(&self) -> Rect {
        Rect::from_center(self.title_center, self.title_size)
    }

    /// The title's clamped rendered size.
    #[inline]
    pub fn title_size(&self) -> Size {
        self.title_size
    }

    /// The indicator glyph's center.
    #[inline]
    pub fn indicator_center(&self) -> Point {
        self.indicator_center
    }

    /// The pinned logical rotation (0 closed, π open).
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Pin the logical rotation.
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    /// Whether the plate shows the open highlight.
    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Set the plate highlight.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_render::FixedAdvanceMeasure;

    fn strip() -> Size {
        Size::new(320.0, 44.0)
    }

    fn visuals(count: usize, titles: &[&str]) -> Vec<ColumnVisual> {
        let theme = MenuTheme::default();
        let measure = FixedAdvanceMeasure::default();
        (0..count)
            .map(|i| {
                ColumnVisual::layout(
                    i,
                    count,
                    strip(),
                    titles.get(i).copied().unwrap_or("").to_string(),
                    &theme,
                    &measure,
                )
            })
            .collect()
    }

    #[test]
    fn test_plates_fill_strip_without_overlap() {
        for count in 1..=4 {
            let cols = visuals(count, &["A", "B", "C", "D"]);
            assert_eq!(cols.len(), count);
            for i in 0..count {
                let plate = cols[i].plate();
                assert!((plate.width() - 320.0 / count as f32).abs() < 0.001);
                assert!((plate.height() - 43.0).abs() < 0.001);
                if i + 1 < count {
                    // Adjacent plates share an edge.
                    assert!((plate.right() - cols[i + 1].plate().left()).abs() < 0.001);
                }
            }
        }
    }

    #[test]
    fn test_title_centered_in_sub_slot() {
        let cols = visuals(2, &["Sort", "Filter"]);
        // Title centers land at (2i+1) · width/(2N).
        assert!((cols[0].title_rect().center().x - 80.0).abs() < 0.001);
        assert!((cols[1].title_rect().center().x - 240.0).abs() < 0.001);
    }

    #[test]
    fn test_title_width_clamped_to_slot() {
        let long = "An Extremely Long Column Title That Cannot Fit";
        let cols = visuals(2, &[long, "B"]);
        let slot_width = 160.0;
        assert!((cols[0].title_size().width - (slot_width - 25.0)).abs() < 0.001);
    }

    #[test]
    fn test_clamp_title_width_never_negative() {
        assert_eq!(clamp_title_width(50.0, 10.0), 0.0);
        assert_eq!(clamp_title_width(10.0, 100.0), 10.0);
    }

    #[test]
    fn test_indicator_sits_after_title() {
        let cols = visuals(2, &["Sort", "Filter"]);
        let visual = &cols[0];
        let expected_x = visual.title_rect().center().x + visual.title_size().width / 2.0 + 8.0;
        assert!((visual.indicator_center().x - expected_x).abs() < 0.001);
        assert!((visual.indicator_center().y - 22.0).abs() < 0.001);
    }

    #[test]
    fn test_indicator_tracks_title_change() {
        let theme = MenuTheme::default();
        let measure = FixedAdvanceMeasure::default();
        let mut cols = visuals(1, &["AB"]);
        let before = cols[0].indicator_center().x;

        cols[0].set_title("ABCDEF".to_string(), &theme, &measure);
        cols[0].reposition_indicator();
        let after = cols[0].indicator_center().x;
        // Wider title pushes the indicator right.
        assert!(after > before);
    }

    #[test]
    fn test_indicator_glyph_shape() {
        let bounds = ColumnVisual::indicator_glyph().bounding_box().unwrap();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 8.0, 5.0));
    }

    #[test]
    fn test_indicator_path_rotation_preserves_center() {
        let cols = visuals(1, &["Sort"]);
        let closed = cols[0].indicator_path(0.0).bounding_box().unwrap();
        let open = cols[0].indicator_path(PI).bounding_box().unwrap();
        // A half turn about the glyph center keeps its bounds in place.
        assert!((closed.center().x - open.center().x).abs() < 0.001);
        assert!((closed.center().y - open.center().y).abs() < 0.001);
    }

    #[test]
    fn test_elide_keeps_fitting_text() {
        let font = MenuTheme::default().font;
        let measure = FixedAdvanceMeasure::default();
        assert_eq!(elide_to_width("Sort", &font, 100.0, &measure), "Sort");
    }

    #[test]
    fn test_elide_cuts_with_ellipsis() {
        let font = MenuTheme::default().font;
        let measure = FixedAdvanceMeasure::default();
        let elided = elide_to_width("A very long title indeed", &font, 50.0, &measure);
        assert!(elided.ends_with('\u{2026}'));
        assert!(measure.measure(&elided, &font, MEASURE_MAX_WIDTH).width <= 50.0);
    }
}

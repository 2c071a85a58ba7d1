//! The row list surface shown beneath an open column.
//!
//! A pull-based adapter over the menu's model: it holds only the open column
//! index and asks the model for row counts and titles on demand, degrading to
//! empty when the model is gone. When the model supplies a custom panel for
//! the column, the surface takes the panel's height and renders it as a
//! single non-scrolling row.

use std::sync::{Arc, Weak};

use cascade_core::{Object, ObjectId};
use cascade_render::{Point, Rect, Stroke};

use super::model::{CustomPanel, IndexPath, MenuModel};
use super::theme::MenuTheme;
use crate::widget::{PaintContext, Widget, WidgetBase};

/// Default fixed row height.
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// At most this many rows are visible at once; taller content scrolls.
pub const MAX_VISIBLE_ROWS: usize = 5;

/// Horizontal inset of row text.
const ROW_TEXT_INSET: f32 = 15.0;

/// Scrollable list of the open column's rows.
pub struct RowListSurface {
    base: WidgetBase,
    model: Weak<dyn MenuModel>,
    /// The column this surface is currently bound to.
    column: Option<usize>,
    /// Custom panel replacing the rows, if the bound column supplies one.
    panel: Option<Arc<dyn CustomPanel>>,
    /// Fixed height of one row.
    row_height: f32,
    /// Scroll offset in logical units; 0 when a panel is present.
    scroll_offset: f32,
    /// Title currently shown for the bound column; the row whose title
    /// matches exactly is highlighted.
    selected_title: String,
    theme: MenuTheme,
}

impl RowListSurface {
    /// Create a surface with the given row height.
    pub fn new(row_height: f32, theme: MenuTheme) -> Self {
        let base = WidgetBase::new::<Self>();
        base.set_name("row_list");
        Self {
            base,
            model: Weak::<super::model::StaticMenuModel>::new(),
            column: None,
            panel: None,
            row_height,
            scroll_offset: 0.0,
            selected_title: String::new(),
            theme,
        }
    }

    /// Bind the surface to a column and reload its content.
    pub fn reload(
        &mut self,
        model: Weak<dyn MenuModel>,
        column: usize,
        selected_title: impl Into<String>,
    ) {
        self.panel = model.upgrade().and_then(|m| m.custom_panel(column));
        self.model = model;
        self.column = Some(column);
        self.scroll_offset = 0.0;
        self.selected_title = selected_title.into();
        self.base.update();
        tracing::debug!(
            target: "cascade::menu",
            column,
            row_count = self.row_count(),
            has_panel = self.panel.is_some(),
            "row list reloaded"
        );
    }

    /// Update the title used for the selected-row highlight.
    pub fn set_selected_title(&mut self, title: impl Into<String>) {
        self.selected_title = title.into();
        self.base.update();
    }

    /// The title the highlight currently matches rows against.
    pub fn selected_title(&self) -> &str {
        &self.selected_title
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: MenuTheme) {
        self.theme = theme;
        self.base.update();
    }

    /// Number of rows in the bound column; 0 without a model or column.
    pub fn row_count(&self) -> usize {
        match (self.model.upgrade(), self.column) {
            (Some(model), Some(column)) => model.row_count(column),
            _ => 0,
        }
    }

    /// Title of a row in the bound column; empty without a model.
    pub fn row_title(&self, row: usize) -> String {
        match (self.model.upgrade(), self.column) {
            (Some(model), Some(column)) => model.row_title(IndexPath::new(column, row)),
            _ => String::new(),
        }
    }

    /// The height the surface takes when fully open.
    ///
    /// A custom panel dictates its own height; otherwise rows stack up to the
    /// visible cap.
    pub fn content_height(&self) -> f32 {
        match &self.panel {
            Some(panel) => panel.height(),
            None => self.row_count().min(MAX_VISIBLE_ROWS) as f32 * self.row_height,
        }
    }

    /// Whether the surface scrolls (custom panels never scroll).
    pub fn is_scroll_enabled(&self) -> bool {
        self.panel.is_none()
    }

    /// Scroll the rows by `dy`, clamped to the content range.
    pub fn scroll_by(&mut self, dy: f32) {
        if !self.is_scroll_enabled() {
            return;
        }
        let overflow = (self.row_count() as f32 * self.row_height - self.content_height()).max(0.0);
        self.scroll_offset = (self.scroll_offset + dy).clamp(0.0, overflow);
        self.base.update();
    }

    /// Current scroll offset.
    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// The row at a surface-local point, honoring the current scroll offset.
    ///
    /// Returns `None` outside the surface, past the last row, or when a
    /// custom panel is present.
    pub fn hit_row(&self, local: Point) -> Option<usize> {
        if self.panel.is_some() {
            return None;
        }
        if !self.base.contains_point(local) {
            return None;
        }
        let row = ((local.y + self.scroll_offset) / self.row_height) as usize;
        (row < self.row_count()).then_some(row)
    }

    /// Insert the surface into the tree beneath `parent`, collapsed.
    pub fn attach(&mut self, parent: Option<ObjectId>) {
        let _ = self.base.set_parent(parent);
        self.base.show();
    }

    /// Remove the surface from the tree entirely.
    pub fn detach(&mut self) {
        let _ = self.base.set_parent(None);
        self.base.hide();
    }

    /// Whether the surface is currently part of the visible tree.
    pub fn is_attached(&self) -> bool {
        self.base.parent_id().is_some()
    }
}

impl Widget for RowListSurface {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        if rect.is_empty() {
            return;
        }

        ctx.renderer().fill_rect(rect, self.theme.row_background);

        if let Some(panel) = &self.panel {
            panel.paint(ctx);
            return;
        }

        let separator = Stroke::new(self.theme.separator, 1.0);
        let first = (self.scroll_offset / self.row_height) as usize;
        for row in first..self.row_count() {
            let y = rect.top() + row as f32 * self.row_height - self.scroll_offset;
            if y >= rect.bottom() {
                break;
            }

            let title = self.row_title(row);
            if title == self.selected_title {
                ctx.renderer().fill_rect(
                    Rect::new(rect.left(), y, rect.width(), self.row_height),
                    self.theme.plate_selected,
                );
            }

            let text_y = y + (self.row_height - self.theme.font.line_height()) / 2.0;
            ctx.renderer().draw_text(
                &title,
                &self.theme.font,
                Point::new(rect.left() + ROW_TEXT_INSET, text_y),
                self.theme.row_text,
            );

            let sep_y = y + self.row_height;
            if sep_y < rect.bottom() {
                ctx.renderer().draw_line(
                    Point::new(rect.left(), sep_y),
                    Point::new(rect.right(), sep_y),
                    &separator,
                );
            }
        }
    }
}

impl Object for RowListSurface {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::model::StaticMenuModel;
    use cascade_core::init_global_registry;
    use cascade_render::Size;

    fn surface() -> RowListSurface {
        init_global_registry();
        RowListSurface::new(DEFAULT_ROW_HEIGHT, MenuTheme::default())
    }

    fn model_with_rows(n: usize) -> Arc<dyn MenuModel> {
        let rows: Vec<String> = (0..n).map(|i| format!("Row {i}")).collect();
        Arc::new(StaticMenuModel::new().with_column("Col", rows))
    }

    #[test]
    fn test_unbound_surface_is_empty() {
        let list = surface();
        assert_eq!(list.row_count(), 0);
        assert_eq!(list.row_title(0), "");
        assert_eq!(list.content_height(), 0.0);
    }

    #[test]
    fn test_height_caps_at_five_rows() {
        let mut list = surface();
        let model = model_with_rows(12);
        list.reload(Arc::downgrade(&model), 0, "");

        assert_eq!(list.row_count(), 12);
        assert_eq!(list.content_height(), 5.0 * DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_height_below_cap_uses_row_count() {
        let mut list = surface();
        let model = model_with_rows(3);
        list.reload(Arc::downgrade(&model), 0, "");
        assert_eq!(list.content_height(), 3.0 * DEFAULT_ROW_HEIGHT);
    }

    struct FixedPanel(f32);
    impl CustomPanel for FixedPanel {
        fn height(&self) -> f32 {
            self.0
        }
        fn paint(&self, _ctx: &mut PaintContext<'_>) {}
    }

    #[test]
    fn test_custom_panel_overrides_height_and_scrolling() {
        let mut list = surface();
        let model: Arc<dyn MenuModel> = Arc::new(
            StaticMenuModel::new().with_panel_column("Range", Arc::new(FixedPanel(400.0))),
        );
        list.reload(Arc::downgrade(&model), 0, "");

        assert_eq!(list.content_height(), 400.0);
        assert!(!list.is_scroll_enabled());

        list.scroll_by(50.0);
        assert_eq!(list.scroll_offset(), 0.0);
        assert_eq!(list.hit_row(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_dropped_model_degrades_to_empty() {
        let mut list = surface();
        let model = model_with_rows(4);
        list.reload(Arc::downgrade(&model), 0, "");
        assert_eq!(list.row_count(), 4);

        drop(model);
        assert_eq!(list.row_count(), 0);
        assert_eq!(list.row_title(1), "");
        assert_eq!(list.content_height(), 0.0);
    }

    #[test]
    fn test_scroll_clamps_to_overflow() {
        let mut list = surface();
        let model = model_with_rows(12);
        list.reload(Arc::downgrade(&model), 0, "");

        // 12 rows × 40 against a 200 surface: 280 of overflow.
        list.scroll_by(1000.0);
        assert_eq!(list.scroll_offset(), 280.0);
        list.scroll_by(-1000.0);
        assert_eq!(list.scroll_offset(), 0.0);
    }

    #[test]
    fn test_hit_row_honors_scroll() {
        let mut list = surface();
        let model = model_with_rows(12);
        list.reload(Arc::downgrade(&model), 0, "");
        let content_height = list.content_height();
        list.widget_base_mut()
            .set_size(Size::new(320.0, content_height));

        assert_eq!(list.hit_row(Point::new(10.0, 10.0)), Some(0));
        assert_eq!(list.hit_row(Point::new(10.0, 190.0)), Some(4));

        list.scroll_by(80.0);
        assert_eq!(list.hit_row(Point::new(10.0, 10.0)), Some(2));

        // Outside the surface.
        assert_eq!(list.hit_row(Point::new(10.0, 250.0)), None);
    }
}

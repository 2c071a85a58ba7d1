//! The multi-column dropdown menu widget.
//!
//! [`DropDownMenu`] renders a horizontal strip of column titles. Tapping a
//! column opens a translucent backdrop and a row list beneath the strip;
//! tapping a row commits it as the column's new title and notifies the
//! [`row_selected`](DropDownMenu::row_selected) signal. At most one column is
//! open at a time.
//!
//! The menu pulls all content through a [`MenuModel`] held weakly: a missing
//! model degrades the widget to an empty single-column control instead of
//! failing. The host drives animation by calling
//! [`advance`](DropDownMenu::advance) once per frame.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cascade::menu::{DropDownMenu, MenuModel, StaticMenuModel};
//! use cascade::render::{Point, Size};
//!
//! cascade_core::init_global_registry();
//!
//! let model: Arc<dyn MenuModel> = Arc::new(
//!     StaticMenuModel::new()
//!         .with_column("Sort", ["Newest", "Oldest"])
//!         .with_column("Filter", ["All", "Open"]),
//! );
//!
//! let mut menu = DropDownMenu::new(Point::new(0.0, 80.0), 44.0, Size::new(320.0, 640.0))
//!     .with_model(&model);
//!
//! menu.row_selected.connect(|path| {
//!     println!("picked row {} in column {}", path.row, path.column);
//! });
//!
//! menu.show_column(0);
//! ```

mod backdrop;
mod column;
mod model;
mod row_list;
mod theme;

pub use backdrop::Backdrop;
pub use column::ColumnVisual;
pub use model::{CustomPanel, IndexPath, MenuModel, StaticMenuModel};
pub use row_list::{DEFAULT_ROW_HEIGHT, MAX_VISIBLE_ROWS, RowListSurface};
pub use theme::MenuTheme;

use std::sync::{Arc, Weak};
use std::time::Duration;

use cascade_core::{Object, ObjectId, Signal};
use cascade_render::{FixedAdvanceMeasure, Point, Rect, ShapedTextMeasure, Size, TextMeasure};

use crate::widget::animation::{Easing, Sequence, Stage};
use crate::widget::{MouseButton, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};
use column::INDICATOR_OPEN_ROTATION;

/// Indicator rotation duration.
const INDICATOR_DURATION: Duration = Duration::from_millis(250);
/// Backdrop fade and list grow/shrink duration.
const FADE_DURATION: Duration = Duration::from_millis(200);
/// Height of the hairline shadow under the strip.
const STRIP_SHADOW_HEIGHT: f32 = 0.5;

/// Sequence stage indices, in contract order: the indicator rotates, then the
/// title resizes, then the backdrop fades, then the list grows.
const STAGE_INDICATOR: usize = 0;
const STAGE_BACKDROP: usize = 2;
const STAGE_LIST: usize = 3;

fn transition_sequence() -> Sequence {
    Sequence::new(vec![
        Stage::new("indicator", INDICATOR_DURATION, Easing::EaseInOut),
        Stage::new("title", Duration::ZERO, Easing::Linear),
        Stage::new("backdrop", FADE_DURATION, Easing::EaseInOut),
        Stage::new("list", FADE_DURATION, Easing::EaseInOut),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionDirection {
    Opening,
    Closing,
}

/// The in-flight open/close animation.
struct MenuTransition {
    direction: TransitionDirection,
    column: usize,
    sequence: Sequence,
    backdrop_from: f32,
    backdrop_to: f32,
    list_from: f32,
    list_to: f32,
}

/// Parts of the menu for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuPart {
    /// A column slot in the title strip.
    Strip(usize),
    /// A row in the open list surface.
    Row(usize),
    /// The backdrop behind the open list.
    Backdrop,
    /// Nothing of ours.
    None,
}

/// A multi-column dropdown/picker menu.
///
/// See the [module docs](self) for an overview.
pub struct DropDownMenu {
    base: WidgetBase,
    model: Weak<dyn MenuModel>,
    theme: MenuTheme,
    measure: Arc<dyn TextMeasure>,
    columns: Vec<ColumnVisual>,
    /// Most recently opened column. Survives closing so the row highlight
    /// still tracks the last selection.
    current_column: Option<usize>,
    is_open: bool,
    row_list: RowListSurface,
    backdrop: Backdrop,
    transition: Option<MenuTransition>,
    /// Emitted after a row commit, with the (column, row) address.
    pub row_selected: Signal<IndexPath>,
}

impl DropDownMenu {
    /// Create a menu whose strip spans the host width at `origin`.
    ///
    /// The widget starts without a model: one empty column, closed.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new(origin: Point, strip_height: f32, host: Size) -> Self {
        let measure: Arc<dyn TextMeasure> = match ShapedTextMeasure::new() {
            Ok(shaped) => Arc::new(shaped),
            Err(err) => {
                tracing::warn!(
                    target: "cascade::menu",
                    %err,
                    "falling back to fixed-advance text measurement"
                );
                Arc::new(FixedAdvanceMeasure::default())
            }
        };

        let mut base = WidgetBase::new::<Self>();
        base.set_name("dropdown_menu");
        base.set_geometry(Rect {
            origin,
            size: Size::new(host.width, strip_height),
        });

        let theme = MenuTheme::default();
        let backdrop = Backdrop::new(
            Rect {
                origin,
                size: host,
            },
            theme.backdrop,
        );
        let mut row_list = RowListSurface::new(DEFAULT_ROW_HEIGHT, theme.clone());
        row_list.widget_base_mut().set_geometry(Rect::new(
            origin.x,
            origin.y + strip_height,
            host.width,
            0.0,
        ));

        let mut menu = Self {
            base,
            model: Weak::<StaticMenuModel>::new(),
            theme,
            measure,
            columns: Vec::new(),
            current_column: None,
            is_open: false,
            row_list,
            backdrop,
            transition: None,
            row_selected: Signal::new(),
        };
        menu.reconfigure();
        menu
    }

    /// Attach a data source (builder pattern).
    pub fn with_model(mut self, model: &Arc<dyn MenuModel>) -> Self {
        self.set_model(model);
        self
    }

    /// Replace the theme (builder pattern).
    pub fn with_theme(mut self, theme: MenuTheme) -> Self {
        self.set_theme(theme);
        self
    }

    /// Replace the text measurer (builder pattern).
    pub fn with_measure(mut self, measure: Arc<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self.reconfigure();
        self
    }

    /// Attach a data source.
    ///
    /// The menu keeps only a weak reference; if the model is dropped the
    /// widget degrades to its defaults. All column visuals are rebuilt from
    /// scratch.
    pub fn set_model(&mut self, model: &Arc<dyn MenuModel>) {
        self.model = Arc::downgrade(model);
        self.reconfigure();
    }

    /// Replace the theme and rebuild the visuals.
    pub fn set_theme(&mut self, theme: MenuTheme) {
        self.backdrop.set_color(theme.backdrop);
        self.row_list.set_theme(theme.clone());
        self.theme = theme;
        self.reconfigure();
    }

    /// Rebuild every per-column visual from the model.
    ///
    /// Any open column is force-closed first; prior visuals are discarded,
    /// not patched.
    fn reconfigure(&mut self) {
        self.close_immediately();

        let model = self.model.upgrade();
        let count = model.as_ref().map_or(1, |m| m.column_count().max(1));
        let strip = self.base.size();
        self.columns = (0..count)
            .map(|index| {
                let title = model
                    .as_ref()
                    .map(|m| m.column_title(index))
                    .unwrap_or_default();
                ColumnVisual::layout(index, count, strip, title, &self.theme, self.measure.as_ref())
            })
            .collect();
        self.current_column = None;
        self.base.update();
        tracing::debug!(target: "cascade::menu", columns = count, "menu reconfigured");
    }

    /// Drop any open state without animating.
    fn close_immediately(&mut self) {
        self.transition = None;
        self.is_open = false;
        self.backdrop.detach();
        self.row_list.detach();
        let list_rect = self.list_rect(0.0);
        self.row_list.widget_base_mut().set_geometry(list_rect);
        for column in &mut self.columns {
            column.set_rotation(0.0);
            column.set_highlighted(false);
        }
    }

    // =========================================================================
    // Public surface
    // =========================================================================

    /// Toggle the open/closed state of a column.
    ///
    /// Out-of-range indices are a guarded no-op.
    pub fn show_column(&mut self, column: usize) {
        if column >= self.columns.len() {
            tracing::warn!(
                target: "cascade::menu",
                column,
                column_count = self.columns.len(),
                "show_column out of range"
            );
            return;
        }

        // Close every other column first. State is reset synchronously; any
        // in-flight visual just races to the new endpoint.
        for (index, visual) in self.columns.iter_mut().enumerate() {
            if index != column {
                visual.set_rotation(0.0);
                visual.set_highlighted(false);
            }
        }

        if self.is_open && self.current_column == Some(column) {
            self.begin_close(column);
        } else {
            self.current_column = Some(column);
            let title = self.columns[column].title().to_string();
            self.row_list.reload(self.model.clone(), column, title);
            self.begin_open(column);
        }
        self.base.update();
    }

    /// Route a tap at a window-space point to the part underneath it.
    ///
    /// This is the gesture entry point: strip taps toggle columns, row taps
    /// commit, backdrop taps dismiss.
    pub fn tap_at(&mut self, window_pos: Point) -> bool {
        match self.hit_test(window_pos) {
            MenuPart::Strip(column) => {
                self.show_column(column);
                true
            }
            MenuPart::Row(row) => {
                self.on_row_tapped(row);
                true
            }
            MenuPart::Backdrop => {
                self.backdrop.tapped.emit(());
                self.dismiss();
                true
            }
            MenuPart::None => false,
        }
    }

    /// Programmatically commit `row` in `column`, as if tapped.
    ///
    /// The list does not need to be visually open. Out-of-range addresses are
    /// a guarded no-op.
    pub fn select_row(&mut self, row: usize, column: usize) {
        if column >= self.columns.len() {
            tracing::warn!(
                target: "cascade::menu",
                column,
                column_count = self.columns.len(),
                "select_row out of range"
            );
            return;
        }
        let row_count = self.model.upgrade().map_or(0, |m| m.row_count(column));
        if row >= row_count {
            tracing::warn!(
                target: "cascade::menu",
                column,
                row,
                row_count,
                "select_row row out of range"
            );
            return;
        }

        // Committing one column closes the state of every other, same as a
        // strip tap would.
        for (index, visual) in self.columns.iter_mut().enumerate() {
            if index != column {
                visual.set_rotation(0.0);
                visual.set_highlighted(false);
            }
        }
        self.current_column = Some(column);
        self.commit_row(row);
    }

    /// Overwrite the displayed title of one column.
    ///
    /// A no-op when `column` is out of the configured range. The indicator
    /// does not move; only a row commit repositions it.
    pub fn set_column_title(&mut self, title: impl Into<String>, column: usize) {
        if column >= self.columns.len() {
            tracing::warn!(
                target: "cascade::menu",
                column,
                column_count = self.columns.len(),
                "set_column_title out of range"
            );
            return;
        }
        let title = title.into();
        if self.current_column == Some(column) {
            self.row_list.set_selected_title(title.clone());
        }
        self.columns[column].set_title(title, &self.theme, self.measure.as_ref());
        self.base.update();
    }

    /// Title for a (column, row) address, pulled from the model.
    ///
    /// Empty string without a model.
    pub fn row_title(&self, path: IndexPath) -> String {
        self.model
            .upgrade()
            .map(|m| m.row_title(path))
            .unwrap_or_default()
    }

    /// Close whichever column is currently open, as a backdrop tap would.
    pub fn dismiss(&mut self) {
        if !self.is_open {
            return;
        }
        if let Some(column) = self.current_column {
            self.begin_close(column);
        }
    }

    // =========================================================================
    // State machine internals
    // =========================================================================

    fn begin_open(&mut self, column: usize) {
        self.columns[column].set_rotation(INDICATOR_OPEN_ROTATION);
        self.columns[column].set_highlighted(true);

        let parent = self.base.parent_id();
        let backdrop_from = if self.backdrop.is_attached() {
            self.backdrop.opacity()
        } else {
            self.backdrop.attach(parent);
            0.0
        };
        self.row_list.attach(parent);
        // Keep the strip above the overlay surfaces in the host's tree.
        let _ = self.base.raise();

        // The list re-grows from zero even when switching between open
        // columns; its rows were just reloaded.
        let list_rect = self.list_rect(0.0);
        self.row_list.widget_base_mut().set_geometry(list_rect);

        let mut sequence = transition_sequence();
        sequence.start();
        self.transition = Some(MenuTransition {
            direction: TransitionDirection::Opening,
            column,
            sequence,
            backdrop_from,
            backdrop_to: 1.0,
            list_from: 0.0,
            list_to: self.row_list.content_height(),
        });
        self.is_open = true;
        tracing::debug!(target: "cascade::menu", column, "menu opening");
    }

    fn begin_close(&mut self, column: usize) {
        self.columns[column].set_rotation(0.0);
        self.columns[column].set_highlighted(false);

        let mut sequence = transition_sequence();
        sequence.start();
        self.transition = Some(MenuTransition {
            direction: TransitionDirection::Closing,
            column,
            sequence,
            backdrop_from: self.backdrop.opacity(),
            backdrop_to: 0.0,
            list_from: self.row_list.widget_base().height(),
            list_to: 0.0,
        });
        self.is_open = false;
        tracing::debug!(target: "cascade::menu", column, "menu closing");
    }

    /// Commit a row in the current column: title first, indicator reposition
    /// second, then the close animation starts and the delegate is notified.
    fn commit_row(&mut self, row: usize) {
        let Some(column) = self.current_column else {
            return;
        };

        let title = self.row_title(IndexPath::new(column, row));
        self.columns[column].set_title(title.clone(), &self.theme, self.measure.as_ref());
        self.columns[column].reposition_indicator();
        self.row_list.set_selected_title(title);

        if self.is_open {
            self.begin_close(column);
        } else {
            self.columns[column].set_rotation(0.0);
            self.columns[column].set_highlighted(false);
        }

        // The close animation is already in flight; the notification does not
        // wait for it.
        self.row_selected.emit(IndexPath::new(column, row));
    }

    fn on_row_tapped(&mut self, row: usize) {
        tracing::debug!(target: "cascade::menu", row, "row tapped");
        self.commit_row(row);
    }

    // =========================================================================
    // Geometry and hit testing
    // =========================================================================

    fn list_rect(&self, height: f32) -> Rect {
        let strip = self.base.geometry();
        Rect::new(strip.left(), strip.bottom(), strip.width(), height)
    }

    fn hit_test(&self, window_pos: Point) -> MenuPart {
        let strip = self.base.geometry();
        if strip.contains(window_pos) {
            let slot = strip.width() / self.columns.len() as f32;
            let column = ((window_pos.x - strip.left()) / slot) as usize;
            return MenuPart::Strip(column.min(self.columns.len() - 1));
        }

        if self.is_open {
            let list_rect = self.row_list.widget_base().geometry();
            if list_rect.contains(window_pos) {
                let local = Point::new(
                    window_pos.x - list_rect.left(),
                    window_pos.y - list_rect.top(),
                );
                if let Some(row) = self.row_list.hit_row(local) {
                    return MenuPart::Row(row);
                }
                // Inside the list but on no row (or a custom panel): swallow.
                return MenuPart::None;
            }
            if self.backdrop.is_attached()
                && self.backdrop.widget_base().geometry().contains(window_pos)
            {
                return MenuPart::Backdrop;
            }
        }

        MenuPart::None
    }

    // =========================================================================
    // Frame driving
    // =========================================================================

    /// Advance the open/close animation by `dt`.
    ///
    /// Call once per frame while [`is_animating`](Self::is_animating) returns
    /// `true`. State variables are already settled when the transition starts;
    /// this only moves the displayed visuals and detaches the overlay
    /// surfaces once a close completes.
    pub fn advance(&mut self, dt: Duration) {
        let Some(transition) = &mut self.transition else {
            return;
        };

        let finished = transition.sequence.advance(dt);

        let backdrop_progress = transition.sequence.stage_progress(STAGE_BACKDROP);
        let opacity = transition.backdrop_from
            + (transition.backdrop_to - transition.backdrop_from) * backdrop_progress;
        self.backdrop.set_opacity(opacity);

        let list_progress = transition.sequence.stage_progress(STAGE_LIST);
        let height =
            transition.list_from + (transition.list_to - transition.list_from) * list_progress;
        let list_rect = Rect::new(
            self.base.geometry().left(),
            self.base.geometry().bottom(),
            self.base.geometry().width(),
            height,
        );
        self.row_list.widget_base_mut().set_geometry(list_rect);

        if finished {
            let direction = transition.direction;
            let column = transition.column;
            self.transition = None;

            // Pin the end rotation; the displayed value no longer derives
            // from an animation.
            let target = match direction {
                TransitionDirection::Opening => INDICATOR_OPEN_ROTATION,
                TransitionDirection::Closing => 0.0,
            };
            self.columns[column].set_rotation(target);

            if direction == TransitionDirection::Closing {
                self.backdrop.detach();
                self.row_list.detach();
                let collapsed = self.list_rect(0.0);
                self.row_list.widget_base_mut().set_geometry(collapsed);
            }
            tracing::debug!(target: "cascade::menu", ?direction, column, "transition finished");
        }
        self.base.update();
    }

    /// Whether an open/close transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The rotation the indicator of `column` should render with right now.
    ///
    /// Interpolates while a transition is in flight; otherwise the pinned
    /// value.
    pub fn displayed_indicator_rotation(&self, column: usize) -> f32 {
        if let Some(transition) = &self.transition
            && transition.column == column
        {
            let progress = transition.sequence.stage_progress(STAGE_INDICATOR);
            return match transition.direction {
                TransitionDirection::Opening => INDICATOR_OPEN_ROTATION * progress,
                TransitionDirection::Closing => INDICATOR_OPEN_ROTATION * (1.0 - progress),
            };
        }
        self.columns
            .get(column)
            .map_or(0.0, |visual| visual.rotation())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Whether a column is currently open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The most recently opened column.
    #[inline]
    pub fn current_column(&self) -> Option<usize> {
        self.current_column
    }

    /// Number of configured columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The visual triple for a column.
    pub fn column(&self, index: usize) -> Option<&ColumnVisual> {
        self.columns.get(index)
    }

    /// The row list surface.
    pub fn row_list(&self) -> &RowListSurface {
        &self.row_list
    }

    /// The backdrop.
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint_strip(&self, ctx: &mut PaintContext<'_>) {
        let strip = ctx.rect();
        let origin = strip.origin;

        ctx.renderer().fill_rect(strip, self.theme.plate);

        for (index, visual) in self.columns.iter().enumerate() {
            let plate = visual.plate().offset(origin.x, origin.y);
            let color = if visual.is_highlighted() {
                self.theme.plate_selected
            } else {
                self.theme.plate
            };
            ctx.renderer().fill_rect(plate, color);

            let title_rect = visual.title_rect().offset(origin.x, origin.y);
            let elided = column::elide_to_width(
                visual.title(),
                &self.theme.font,
                visual.title_size().width.max(1.0),
                self.measure.as_ref(),
            );
            ctx.renderer().draw_text(
                &elided,
                &self.theme.font,
                title_rect.origin,
                self.theme.text,
            );

            let rotation = self.displayed_indicator_rotation(index);
            let path = visual.indicator_path(rotation).translated(origin.x, origin.y);
            ctx.renderer().fill_path(&path, self.theme.indicator);
        }

        // Hairline shadow along the strip's bottom edge.
        let shadow = Rect::new(
            strip.left(),
            strip.bottom() - STRIP_SHADOW_HEIGHT,
            strip.width(),
            STRIP_SHADOW_HEIGHT,
        );
        ctx.renderer().fill_rect(shadow, self.theme.separator);
    }
}

impl Widget for DropDownMenu {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.base.size())
    }

    /// Paint the backdrop, then the list surface, then the strip, bottom to
    /// top.
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.backdrop.is_attached() {
            let rect = self.backdrop.widget_base().geometry();
            let mut sub = PaintContext::new(ctx.renderer(), rect);
            self.backdrop.paint(&mut sub);
        }
        if self.row_list.is_attached() {
            let rect = self.row_list.widget_base().geometry();
            let mut sub = PaintContext::new(ctx.renderer(), rect);
            self.row_list.paint(&mut sub);
        }
        self.paint_strip(ctx);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(press) => {
                if press.button != MouseButton::Left {
                    return false;
                }
                let pos = press.window_pos;
                self.tap_at(pos)
            }
            WidgetEvent::Wheel(wheel) => {
                let pos = wheel.window_pos;
                let delta = wheel.delta_y;
                if self.is_open
                    && self.row_list.is_scroll_enabled()
                    && self.row_list.widget_base().geometry().contains(pos)
                {
                    self.row_list.scroll_by(delta);
                    return true;
                }
                false
            }
        }
    }
}

impl Object for DropDownMenu {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

#[cfg(test)]
mod tests;

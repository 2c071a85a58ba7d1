//! Translucent full-screen backdrop shown behind an open column.
//!
//! The backdrop exists for the whole life of the menu but is only parented
//! into the visible tree while a column is open. A tap on it closes the menu
//! without committing a row.

use cascade_core::{Object, ObjectId, Signal};
use cascade_render::{Color, Rect};

use crate::widget::{PaintContext, Widget, WidgetBase};

/// Full-screen dimming layer.
pub struct Backdrop {
    base: WidgetBase,
    /// Backdrop color at full opacity.
    color: Color,
    /// Current opacity fraction, 0.0 (hidden) to 1.0 (fully shown).
    opacity: f32,
    /// Emitted when the backdrop is tapped.
    pub tapped: Signal<()>,
}

impl Backdrop {
    /// Create a backdrop covering `host_rect`.
    pub fn new(host_rect: Rect, color: Color) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_name("backdrop");
        base.set_geometry(host_rect);
        base.set_visible(false);
        Self {
            base,
            color,
            opacity: 0.0,
            tapped: Signal::new(),
        }
    }

    /// Current opacity fraction.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity fraction (clamped to 0.0–1.0).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.base.update();
    }

    /// Set the full-opacity color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.base.update();
    }

    /// Insert the backdrop into the tree beneath `parent`, fully transparent.
    pub fn attach(&mut self, parent: Option<ObjectId>) {
        let _ = self.base.set_parent(parent);
        self.opacity = 0.0;
        self.base.show();
    }

    /// Remove the backdrop from the tree entirely.
    pub fn detach(&mut self) {
        let _ = self.base.set_parent(None);
        self.opacity = 0.0;
        self.base.hide();
    }

    /// Whether the backdrop is currently part of the visible tree.
    pub fn is_attached(&self) -> bool {
        self.base.parent_id().is_some()
    }

    /// The color the backdrop currently renders with.
    pub fn effective_color(&self) -> Color {
        Color::TRANSPARENT.lerp(self.color, self.opacity)
    }
}

impl Widget for Backdrop {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if self.opacity <= 0.0 {
            return;
        }
        let rect = ctx.rect();
        let color = self.effective_color();
        ctx.renderer().fill_rect(rect, color);
    }
}

impl Object for Backdrop {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

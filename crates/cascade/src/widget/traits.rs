//! The widget trait and its painting context.

use cascade_render::{Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Rendering context passed to [`Widget::paint`].
///
/// Wraps the host's [`Renderer`] together with the widget's frame in window
/// coordinates. Widgets position everything they draw relative to
/// [`rect`](Self::rect); the renderer has no transform stack of its own.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's frame in window coordinates.
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }
}

/// Size hint a widget reports for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size.
    pub preferred: Size,
    /// The minimum acceptable size, if any.
    pub minimum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with only a preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
        }
    }

    /// Set the minimum size (builder pattern).
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// The base trait for all UI elements.
///
/// Widgets contain a [`WidgetBase`] and delegate common state to it; the
/// trait adds painting and event handling on top.
pub trait Widget: cascade_core::Object {
    /// Access the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable access to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's preferred size.
    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.widget_base().size())
    }

    /// Paint the widget into its local rectangle.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an input event. Return `true` if the event was consumed.
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let _ = event;
        false
    }
}

//! Widget base implementation.
//!
//! `WidgetBase` carries the common state every widget needs: object system
//! integration, geometry, visibility, and the repaint flag. Widget types
//! include it as a field and delegate to it.

use cascade_core::{Object, ObjectBase, ObjectId, ObjectResult, Signal};
use cascade_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// # Example
///
/// ```ignore
/// struct Plate {
///     base: WidgetBase,
/// }
///
/// impl Widget for Plate {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn paint(&self, ctx: &mut PaintContext<'_>) { /* ... */ }
/// }
/// ```
pub struct WidgetBase {
    /// The underlying object base for Object trait implementation.
    object_base: ObjectBase,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Object System Delegation
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    /// Get the parent widget's object ID.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object_base.parent()
    }

    /// Set the parent widget.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object_base.set_parent(parent)
    }

    /// Get the IDs of child widgets.
    pub fn children_ids(&self) -> Vec<ObjectId> {
        self.object_base.children()
    }

    /// Raise the widget above its siblings.
    pub fn raise(&self) -> ObjectResult<()> {
        self.object_base.raise()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect {
            origin: self.geometry.origin,
            size,
        });
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// Always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    #[inline]
    pub fn map_to_parent(&self, point: Point) -> Point {
        Point::new(
            point.x + self.geometry.origin.x,
            point.y + self.geometry.origin.y,
        )
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::init_global_registry;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Probe {
        base: WidgetBase,
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.object_id()
        }
    }

    fn probe() -> Probe {
        init_global_registry();
        Probe {
            base: WidgetBase::new::<Probe>(),
        }
    }

    #[test]
    fn test_geometry_change_signals() {
        let mut widget = probe();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        widget.base.geometry_changed.connect(move |_| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        widget.base.set_geometry(Rect::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Setting the same geometry again does not re-emit.
        widget.base.set_geometry(Rect::new(0.0, 0.0, 320.0, 44.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_coordinate_mapping() {
        let mut widget = probe();
        widget.base.set_geometry(Rect::new(10.0, 20.0, 100.0, 50.0));

        assert_eq!(
            widget.base.map_to_parent(Point::new(5.0, 5.0)),
            Point::new(15.0, 25.0)
        );
        assert_eq!(
            widget.base.map_from_parent(Point::new(15.0, 25.0)),
            Point::new(5.0, 5.0)
        );
        assert!(widget.base.contains_point(Point::new(50.0, 25.0)));
        assert!(!widget.base.contains_point(Point::new(150.0, 25.0)));
    }

    #[test]
    fn test_repaint_flag() {
        let mut widget = probe();
        assert!(widget.base.needs_repaint());

        widget.base.clear_repaint_flag();
        assert!(!widget.base.needs_repaint());

        widget.base.update();
        assert!(widget.base.needs_repaint());
    }
}

//! Input events delivered to widgets.
//!
//! Pared to what a tap-driven overlay widget consumes: mouse presses for tap
//! routing and wheel events for list scrolling.

use cascade_render::Point;

/// Common state shared by all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base, initially not accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the event as handled.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Mark the event as unhandled.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }

    /// Check if the event was handled.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A mouse button press.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, window_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            window_pos,
        }
    }
}

/// A scroll wheel movement.
#[derive(Debug, Clone, Copy)]
pub struct WheelEvent {
    /// Base event data.
    pub base: EventBase,
    /// Vertical scroll amount in logical units; positive scrolls content up.
    pub delta_y: f32,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Position in window coordinates.
    pub window_pos: Point,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(delta_y: f32, local_pos: Point, window_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            delta_y,
            local_pos,
            window_pos,
        }
    }
}

/// All events a widget can receive.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Mouse button pressed.
    MousePress(MousePressEvent),
    /// Scroll wheel moved.
    Wheel(WheelEvent),
}

impl WidgetEvent {
    /// Mark the event as handled.
    pub fn accept(&mut self) {
        match self {
            Self::MousePress(e) => e.base.accept(),
            Self::Wheel(e) => e.base.accept(),
        }
    }

    /// Check if the event was handled.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::MousePress(e) => e.base.is_accepted(),
            Self::Wheel(e) => e.base.is_accepted(),
        }
    }
}

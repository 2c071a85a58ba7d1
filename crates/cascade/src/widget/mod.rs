//! Widget system for Cascade.
//!
//! The foundational widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation for widget functionality
//! - [`PaintContext`]: rendering context passed to [`Widget::paint`]
//! - Input events and frame-driven animation primitives
//!
//! Widgets form a tree through the object system in `cascade-core`;
//! re-parenting is how overlay surfaces are attached to and detached from
//! the visible tree.

pub mod animation;
mod base;
mod events;
mod traits;

pub use base::WidgetBase;
pub use events::{EventBase, MouseButton, MousePressEvent, WheelEvent, WidgetEvent};
pub use traits::{PaintContext, SizeHint, Widget};

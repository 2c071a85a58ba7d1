//! Prelude module for Cascade.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use cascade::prelude::*;
//! ```

// ============================================================================
// Object System and Signals
// ============================================================================

pub use cascade_core::{Object, ObjectBase, ObjectId, Signal, init_global_registry};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    MouseButton, MousePressEvent, PaintContext, SizeHint, WheelEvent, Widget, WidgetBase,
    WidgetEvent,
};

// ============================================================================
// The Menu
// ============================================================================

pub use crate::menu::{
    CustomPanel, DropDownMenu, IndexPath, MenuModel, MenuTheme, StaticMenuModel,
};

// ============================================================================
// Render Primitives
// ============================================================================

pub use cascade_render::{
    Color, FixedAdvanceMeasure, Font, FontFamily, Path, Point, Rect, Renderer,
    ShapedTextMeasure, Size, Stroke, TextMeasure,
};

//! Cascade - a multi-column dropdown/picker menu widget.
//!
//! Cascade renders a horizontal strip of column titles over a host screen.
//! Tapping a column drops a row list and a translucent backdrop beneath the
//! strip; tapping a row commits it as the column's new title and notifies a
//! selection signal. Content is pulled from a host-supplied
//! [`MenuModel`](menu::MenuModel), painting goes through the host's
//! [`Renderer`](cascade_render::Renderer) implementation, and the host drives
//! animation frames explicitly — the widget binds to no windowing or graphics
//! stack of its own.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cascade::menu::{DropDownMenu, MenuModel, StaticMenuModel};
//! use cascade::render::{Point, Size};
//!
//! cascade::init_global_registry();
//!
//! let model: Arc<dyn MenuModel> = Arc::new(
//!     StaticMenuModel::new()
//!         .with_column("Sort", ["Newest", "Oldest"])
//!         .with_column("Filter", ["All", "Open", "Done"]),
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

pub use cascade_core::*;

/// Render primitives module.
pub mod render {
    pub use cascade_render::*;
}

pub mod menu;
pub mod prelude;
pub mod widget;

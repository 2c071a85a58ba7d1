//! Core systems for Cascade.
//!
//! This crate provides the foundation the Cascade widget crates build on:
//!
//! - **Object Model**: stable object identifiers, parent-child ownership,
//!   naming, and sibling z-order, backed by an arena registry
//! - **Signal/Slot System**: type-safe notification between objects
//! - **Logging Helpers**: `tracing` target constants and an object-tree dumper
//!
//! # Signal Example
//!
//! ```
//! use cascade_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Example
//!
//! ```
//! use cascade_core::{Object, ObjectBase, ObjectId, init_global_registry};
//!
//! init_global_registry();
//!
//! struct Panel {
//!     base: ObjectBase,
//! }
//!
//! impl Panel {
//!     fn new() -> Self {
//!         Self { base: ObjectBase::new::<Self>() }
//!     }
//! }
//!
//! impl Object for Panel {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! let panel = Panel::new();
//! panel.base.set_name("panel");
//! assert_eq!(panel.base.name(), "panel");
//! ```

pub mod logging;
pub mod object;
pub mod signal;

pub use logging::ObjectTreeDebug;
pub use object::{
    Object, ObjectBase, ObjectError, ObjectId, ObjectRegistry, ObjectResult,
    SharedObjectRegistry, global_registry, init_global_registry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

//! Logging and debugging facilities for Cascade.
//!
//! Cascade uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! [`ObjectTreeDebug`] renders the live object hierarchy, which is the
//! quickest way to see whether a widget's backdrop and list surface are
//! currently attached.

use std::fmt::Write as FmtWrite;

use crate::object::{ObjectId, ObjectResult, global_registry};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "cascade_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "cascade_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "cascade_core::object";
    /// Menu widget target.
    pub const MENU: &str = "cascade::menu";
}

/// Renders the object tree rooted at a given object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectTreeDebug;

impl ObjectTreeDebug {
    /// Create a new tree dumper.
    pub fn new() -> Self {
        Self
    }

    /// Format the tree rooted at `root` as an indented listing.
    ///
    /// Each line shows the object's name (or `<unnamed>`) and its type.
    pub fn format_tree(&self, root: ObjectId) -> ObjectResult<String> {
        let registry = global_registry()?;
        let mut out = String::new();
        registry.with_read(|reg| self.format_node(reg, root, 0, &mut out))?;
        Ok(out)
    }

    fn format_node(
        &self,
        registry: &crate::object::ObjectRegistry,
        id: ObjectId,
        depth: usize,
        out: &mut String,
    ) -> ObjectResult<()> {
        let name = registry.object_name(id)?;
        let type_name = registry.type_name(id)?;
        let display_name = if name.is_empty() { "<unnamed>" } else { name };
        let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
        let _ = writeln!(out, "{}{} ({})", "  ".repeat(depth), display_name, short_type);

        let children: Vec<ObjectId> = registry.children(id)?.to_vec();
        for child in children {
            self.format_node(registry, child, depth + 1, out)?;
        }
        Ok(())
    }
}

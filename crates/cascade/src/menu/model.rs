//! Data-source contract for the dropdown menu.
//!
//! The menu pulls everything it displays through [`MenuModel`]: how many
//! columns exist, each column's title, and the rows beneath an open column.
//! Every capability has a default so a partial implementation degrades to an
//! empty single-column control instead of failing.

use std::sync::Arc;

use crate::widget::PaintContext;

/// Address of a single row: a (column, row) pair.
///
/// Row indices are column-local; only the pair is globally meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    /// The column index.
    pub column: usize,
    /// The row index within that column.
    pub row: usize,
}

impl IndexPath {
    /// Create a new index path.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// A host-supplied panel that replaces a column's row list.
///
/// When a column provides a panel, the list surface takes exactly the panel's
/// height, disables scrolling and separators, and delegates rendering of the
/// single logical row to the panel.
pub trait CustomPanel: Send + Sync {
    /// The panel's fixed height.
    fn height(&self) -> f32;

    /// Paint the panel into the given context.
    fn paint(&self, ctx: &mut PaintContext<'_>);
}

/// Pull-based data source for a [`DropDownMenu`](crate::menu::DropDownMenu).
///
/// All capabilities have defaults, so implementors override only what they
/// need. The menu holds the model weakly and falls back to these defaults
/// whenever the model is absent.
pub trait MenuModel: Send + Sync {
    /// Number of columns in the menu.
    fn column_count(&self) -> usize {
        1
    }

    /// Number of rows beneath a column.
    fn row_count(&self, _column: usize) -> usize {
        0
    }

    /// Title of a single row.
    fn row_title(&self, _path: IndexPath) -> String {
        String::new()
    }

    /// Title shown in a column's strip slot.
    fn column_title(&self, _column: usize) -> String {
        String::new()
    }

    /// A custom panel replacing the row list for a column, if any.
    fn custom_panel(&self, _column: usize) -> Option<Arc<dyn CustomPanel>> {
        None
    }
}

/// One column of a [`StaticMenuModel`].
struct StaticColumn {
    title: String,
    rows: Vec<String>,
    panel: Option<Arc<dyn CustomPanel>>,
}

/// A ready-made [`MenuModel`] backed by in-memory titles and rows.
#[derive(Default)]
pub struct StaticMenuModel {
    columns: Vec<StaticColumn>,
}

impl StaticMenuModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column with a title and its rows (builder pattern).
    pub fn with_column(
        mut self,
        title: impl Into<String>,
        rows: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.add_column(title, rows);
        self
    }

    /// Append a column whose row list is replaced by a custom panel
    /// (builder pattern).
    pub fn with_panel_column(
        mut self,
        title: impl Into<String>,
        panel: Arc<dyn CustomPanel>,
    ) -> Self {
        self.columns.push(StaticColumn {
            title: title.into(),
            rows: Vec::new(),
            panel: Some(panel),
        });
        self
    }

    /// Append a column with a title and its rows.
    pub fn add_column(
        &mut self,
        title: impl Into<String>,
        rows: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.columns.push(StaticColumn {
            title: title.into(),
            rows: rows.into_iter().map(Into::into).collect(),
            panel: None,
        });
    }
}

impl MenuModel for StaticMenuModel {
    fn column_count(&self) -> usize {
        self.columns.len().max(1)
    }

    fn row_count(&self, column: usize) -> usize {
        self.columns.get(column).map_or(0, |c| c.rows.len())
    }

    fn row_title(&self, path: IndexPath) -> String {
        self.columns
            .get(path.column)
            .and_then(|c| c.rows.get(path.row))
            .cloned()
            .unwrap_or_default()
    }

    fn column_title(&self, column: usize) -> String {
        self.columns
            .get(column)
            .map(|c| c.title.clone())
            .unwrap_or_default()
    }

    fn custom_panel(&self, column: usize) -> Option<Arc<dyn CustomPanel>> {
        self.columns.get(column).and_then(|c| c.panel.clone())
    }
}

//! Column definitions and the cell formatter interface.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

/// Context handed to cell formatters alongside the raw field value.
///
/// Carries the per-row computed state (nesting `level`, flattened `index`)
/// that the tree formatter and custom formatters may need.
#[derive(Clone, Copy, Debug)]
pub struct CellContext<'a> {
    /// The row being formatted.
    pub row: &'a Value,
    /// The column being formatted.
    pub column: &'a Column,
    /// Nesting depth of the row: 0 for roots.
    pub level: usize,
    /// Position of the row in the flattened render sequence.
    pub index: usize,
}

type FormatterFn = dyn Fn(Option<&Value>, &CellContext<'_>) -> Option<String> + Send + Sync;

/// A caller-supplied cell formatter.
///
/// Receives the raw field value (`None` when the row has no such field)
/// and the cell context. Returning `None` renders the configured null
/// placeholder.
#[derive(Clone)]
pub struct Formatter(Arc<FormatterFn>);

impl Formatter {
    /// Wraps a formatting function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &CellContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Formatter(Arc::new(f))
    }

    pub(crate) fn apply(&self, value: Option<&Value>, ctx: &CellContext<'_>) -> Option<String> {
        (self.0)(value, ctx)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// A column definition: the row field it reads, its display label, the
/// type tag used for comparator selection, and an optional width cap.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Column {
    /// Key into row records.
    pub id: String,
    /// Display label; whitespace is normalized before layout.
    pub name: String,
    /// Semantic type tag selecting a sort comparator (`"type"` in JSON).
    /// Untyped and unknown tags compare as strings.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Width cap for this column; non-positive or unset falls back to the
    /// configured default.
    pub max_width: Option<usize>,
    /// Custom cell formatter, taking precedence over the built-in ones.
    #[serde(skip)]
    pub formatter: Option<Formatter>,
}

impl Column {
    /// New column reading `id`, displayed under the same label.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Column {
            name: id.clone(),
            id,
            kind: None,
            max_width: None,
            formatter: None,
        }
    }

    /// Set the display label.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the type tag used to pick a sort comparator.
    pub fn typed(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Cap the rendered width of this column.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Attach a custom cell formatter.
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, &CellContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.formatter = Some(Formatter::new(f));
        self
    }

    /// Effective width cap: the column's own positive `max_width`, else
    /// `fallback`.
    pub(crate) fn effective_max_width(&self, fallback: usize) -> usize {
        match self.max_width {
            Some(width) if width > 0 => width,
            _ => fallback,
        }
    }
}

//! Cell formatting: raw field values to display strings.
//!
//! Each column resolves to one formatter for the whole render pass: the
//! caller-supplied one when present, the tree formatter for the
//! designated tree column, the default otherwise. Output is whitespace
//! normalized so downstream width math never sees tabs or newlines.

use serde_json::Value;

use crate::column::{CellContext, Column, Formatter};
use crate::options::GridOptions;
use crate::tree::FlatRow;

/// A flattened row ready for layout: computed tree state plus one
/// formatted string per column, in column declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    /// Nesting depth: 0 for roots.
    pub level: usize,
    /// Position in the flattened render sequence.
    pub index: usize,
    /// Formatted cell strings, one per declared column.
    pub cells: Vec<String>,
}

enum Resolved<'a> {
    Custom(&'a Formatter),
    Tree,
    Default,
}

fn resolve<'a>(column: &'a Column, options: &GridOptions) -> Resolved<'a> {
    if let Some(custom) = &column.formatter {
        return Resolved::Custom(custom);
    }
    if options.tree_id.as_deref() == Some(column.id.as_str()) {
        return Resolved::Tree;
    }
    Resolved::Default
}

/// Replaces every whitespace character with a single ASCII space.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Display text for a raw field value: strings verbatim, scalars via
/// their display form, structured values as compact JSON. Null yields
/// `None` so the placeholder applies.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn tree_prefix(options: &GridOptions, level: usize) -> String {
    let mut prefix = options.tree_indent.repeat(level);
    prefix.push_str(&options.tree_icon);
    prefix
}

/// Formats every cell of every flattened row.
pub fn format_rows(
    flat: &[FlatRow<'_>],
    columns: &[Column],
    options: &GridOptions,
) -> Vec<GridRow> {
    let resolved: Vec<Resolved<'_>> = columns
        .iter()
        .map(|column| resolve(column, options))
        .collect();
    flat.iter()
        .map(|row| {
            let cells = columns
                .iter()
                .zip(&resolved)
                .map(|(column, formatter)| {
                    let value = row.node.get(&column.id);
                    let ctx = CellContext {
                        row: row.node,
                        column,
                        level: row.level,
                        index: row.index,
                    };
                    let text = match formatter {
                        Resolved::Custom(custom) => custom.apply(value, &ctx),
                        Resolved::Tree => value
                            .and_then(value_text)
                            .map(|v| format!("{}{}", tree_prefix(options, row.level), v)),
                        Resolved::Default => value.and_then(value_text),
                    };
                    match text {
                        Some(text) => normalize_whitespace(&text),
                        None => options.null_placeholder.clone(),
                    }
                })
                .collect();
            GridRow {
                level: row.level,
                index: row.index,
                cells,
            }
        })
        .collect()
}

//! # termgrid - bordered text grids for terminal output
//!
//! Renders tabular or tree-shaped records as a fixed-width, box-drawn
//! grid of text lines: column widths are balanced against header and cell
//! content, header labels wrap to fit, overflowing cells are truncated at
//! word boundaries with a trailing ellipsis, and embedded color escape
//! sequences never count toward visible width.
//!
//! Rows are plain JSON objects; a row's `subs` key may hold child rows,
//! which render below their parent with per-level indentation. One render
//! call consumes one immutable snapshot of the data and pushes finished
//! lines to a [`LineSink`].
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use termgrid::{render_lines, Column, GridData};
//!
//! let data = GridData::new(
//!     vec![Column::new("name"), Column::new("age").typed("number")],
//!     vec![json!({"name": "Bob", "age": 30})],
//! );
//!
//! let lines = render_lines(data);
//! assert_eq!(lines, [
//!     "┌ ──── ┬ ─── ┐",
//!     "│ name │ age │",
//!     "├ ──── ┼ ─── ┤",
//!     "│ Bob  │ 30  │",
//!     "└ ──── ┴ ─── ┘",
//! ]);
//! ```
//!
//! ## Tree rows
//!
//! ```rust
//! use serde_json::json;
//! use termgrid::{render_lines, Column, GridData, GridOptions};
//!
//! let data = GridData::new(
//!     vec![Column::new("name")],
//!     vec![json!({"name": "A", "subs": [{"name": "B"}]})],
//! )
//! .options(GridOptions::default().tree("name"));
//!
//! let lines = render_lines(data);
//! assert_eq!(lines[3], "│ |- A    │");
//! assert_eq!(lines[4], "│    |- B │");
//! ```
//!
//! Sorting is column-aware (a `"number"` type tag compares numerically)
//! and level-local: sibling lists are ordered at every tree depth, and
//! blank values always cluster at the end regardless of direction.

mod column;
mod data;
mod error;
mod formatter;
mod layout;
mod options;
mod render;
mod sort;
pub mod style;
mod text;
mod tree;

pub use column::{CellContext, Column, Formatter};
pub use data::GridData;
pub use error::GridError;
pub use formatter::{format_rows, GridRow};
pub use layout::{layout_columns, ColumnLayout, GridLayout};
pub use options::{BorderChars, GridOptions};
pub use render::{render, render_lines, IoSink, LineSink};
pub use sort::{comparer_for, sort_rows, Comparer, SortOptions};
pub use text::{strip_color, truncate, visible_width};
pub use tree::{flatten, walk, FlatRow, Visit};

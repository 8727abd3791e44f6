//! Column width resolution and header wrapping.
//!
//! Widths balance header and cell content against a per-column cap, with
//! a floor of 3 (room for an ellipsis). Header labels wider than their
//! column wrap greedily at spaces; afterwards every column's header block
//! is padded with leading empty lines so the labels sit bottom-aligned.

use crate::column::Column;
use crate::formatter::{normalize_whitespace, GridRow};
use crate::options::GridOptions;
use crate::text::visible_width;

/// Computed per-column layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Display label after whitespace normalization.
    pub name: String,
    /// Final rendered width, at least 3.
    pub width: usize,
    /// Header label wrapped to the width, padded to the grid-wide line
    /// count with leading empty lines.
    pub lines: Vec<String>,
}

/// Layout of every column plus the shared header block height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: Vec<ColumnLayout>,
    /// Lines in the header block; at least 1 even for an empty grid.
    pub header_lines: usize,
}

/// Lays out every column against the formatted rows.
pub fn layout_columns(columns: &[Column], rows: &[GridRow], options: &GridOptions) -> GridLayout {
    let mut layouts: Vec<ColumnLayout> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let name = normalize_whitespace(&column.name);
            let width = column_width(column, &name, rows, index, options);
            let lines = header_lines(&name, width);
            ColumnLayout { name, width, lines }
        })
        .collect();

    let header_lines = layouts
        .iter()
        .map(|layout| layout.lines.len())
        .max()
        .unwrap_or(0)
        .max(1);
    for layout in &mut layouts {
        while layout.lines.len() < header_lines {
            layout.lines.insert(0, String::new());
        }
    }

    GridLayout {
        columns: layouts,
        header_lines,
    }
}

/// Width of one column: the widest of the label and every formatted cell
/// across the whole flattened row set, capped by the column's effective
/// maximum, floored at 3.
fn column_width(
    column: &Column,
    name: &str,
    rows: &[GridRow],
    index: usize,
    options: &GridOptions,
) -> usize {
    let mut width = visible_width(name);
    for row in rows {
        width = width.max(visible_width(&row.cells[index]));
    }
    width = width.min(column.effective_max_width(options.default_max_width));
    width.max(3)
}

/// Wraps `name` into lines fitting `width`, greedily packing
/// space-delimited tokens. A label narrower than the column stays on one
/// line.
fn header_lines(name: &str, width: usize) -> Vec<String> {
    if visible_width(name) < width {
        return vec![name.to_string()];
    }
    let mut lines = Vec::new();
    let mut tokens = name.split(' ').peekable();
    while let Some(first) = tokens.next() {
        let mut line = first.to_string();
        while let Some(next) = tokens.peek() {
            if visible_width(&format!("{}{}", line, next)) >= width {
                break;
            }
            line.push(' ');
            line.push_str(next);
            tokens.next();
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_row(cells: &[&str]) -> GridRow {
        GridRow {
            level: 0,
            index: 0,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn width_grows_to_widest_cell() {
        let columns = vec![Column::new("name")];
        let rows = vec![grid_row(&["Bob"]), grid_row(&["Bartholomew"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 11);
    }

    #[test]
    fn width_grows_to_label() {
        let columns = vec![Column::new("id").named("Identifier")];
        let rows = vec![grid_row(&["7"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 10);
    }

    #[test]
    fn width_capped_by_column_max() {
        let columns = vec![Column::new("msg").max_width(10)];
        let rows = vec![grid_row(&["a very long message indeed"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 10);
    }

    #[test]
    fn width_capped_by_default_max() {
        let columns = vec![Column::new("msg")];
        let rows = vec![grid_row(&["x".repeat(80).as_str()])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 30);
    }

    #[test]
    fn width_floor_is_three() {
        let columns = vec![Column::new("a")];
        let rows = vec![grid_row(&["x"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 3);
    }

    #[test]
    fn width_floor_wins_over_tiny_max() {
        let columns = vec![Column::new("value").max_width(2)];
        let rows = vec![grid_row(&["12345"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 3);
    }

    #[test]
    fn colored_cells_measure_stripped() {
        let columns = vec![Column::new("c")];
        let rows = vec![grid_row(&["\x1b[31mBob\x1b[0m"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 3);
    }

    #[test]
    fn narrow_label_stays_on_one_line() {
        let columns = vec![Column::new("name")];
        let rows = vec![grid_row(&["Bartholomew"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].lines, ["name"]);
    }

    #[test]
    fn exact_width_label_stays_whole() {
        // The wrap path is entered but a single token reproduces itself.
        let columns = vec![Column::new("name")];
        let rows = vec![grid_row(&["Bob"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 4);
        assert_eq!(layout.columns[0].lines, ["name"]);
    }

    #[test]
    fn wide_label_wraps_at_spaces() {
        let columns = vec![Column::new("t").named("Long Header Text").max_width(8)];
        let rows = vec![grid_row(&["x"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].width, 8);
        assert_eq!(layout.columns[0].lines, ["Long", "Header", "Text"]);
        for line in &layout.columns[0].lines {
            assert!(visible_width(line) < 8);
        }
    }

    #[test]
    fn header_blocks_bottom_aligned() {
        let columns = vec![
            Column::new("s").named("Status Flag").max_width(6),
            Column::new("id"),
        ];
        let rows = vec![grid_row(&["ok", "1"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.header_lines, 2);
        assert_eq!(layout.columns[0].lines, ["Status", "Flag"]);
        assert_eq!(layout.columns[1].lines, ["", "id"]);
    }

    #[test]
    fn label_whitespace_normalized() {
        let columns = vec![Column::new("a").named("two\twords")];
        let rows = vec![grid_row(&["1234567890"])];
        let layout = layout_columns(&columns, &rows, &GridOptions::default());
        assert_eq!(layout.columns[0].name, "two words");
    }

    #[test]
    fn empty_grid_keeps_one_header_line() {
        let layout = layout_columns(&[], &[], &GridOptions::default());
        assert!(layout.columns.is_empty());
        assert_eq!(layout.header_lines, 1);
    }
}

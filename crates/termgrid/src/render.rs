//! Grid assembly: borders, header block, and data rows.
//!
//! [`render`] drives the whole pipeline over one input snapshot (sort,
//! flatten, format, lay out) and pushes each finished line to the
//! caller's sink.

use std::io::Write;

use crate::data::GridData;
use crate::formatter::format_rows;
use crate::layout::{layout_columns, ColumnLayout};
use crate::options::{BorderPosition, GridOptions};
use crate::sort::sort_rows;
use crate::text::{truncate, visible_width};
use crate::tree::flatten;

/// Receives rendered lines one at a time.
///
/// The engine treats emission as synchronous and non-failing; sinks over
/// fallible targets should record errors themselves.
pub trait LineSink {
    fn emit(&mut self, line: String);
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

/// Sink writing each line to an [`io::Write`](std::io::Write),
/// newline-terminated. Write errors are discarded.
#[derive(Debug)]
pub struct IoSink<W: Write>(pub W);

impl<W: Write> LineSink for IoSink<W> {
    fn emit(&mut self, line: String) {
        let _ = writeln!(self.0, "{}", line);
    }
}

/// Renders `data` as a bordered grid, emitting one text line per call to
/// `sink`.
///
/// Line sequence: top border; unless headers are hidden, the header block
/// and the middle border; one line per flattened row; bottom border.
pub fn render<S: LineSink>(data: GridData, sink: &mut S) {
    let GridData {
        options,
        columns,
        mut rows,
    } = data;
    sort_rows(&mut rows, &columns, &options);
    let flat = flatten(&rows);
    let grid_rows = format_rows(&flat, &columns, &options);
    let layout = layout_columns(&columns, &grid_rows, &options);
    let pad = " ".repeat(options.padding);

    sink.emit(border_line(&layout.columns, &options, &pad, BorderPosition::Top));
    if !options.hide_headers {
        for i in 0..layout.header_lines {
            let cells = layout
                .columns
                .iter()
                .map(|column| cell(&column.lines[i], column.width))
                .collect();
            sink.emit(content_line(cells, &options, &pad));
        }
        sink.emit(border_line(&layout.columns, &options, &pad, BorderPosition::Mid));
    }
    for row in &grid_rows {
        let cells = layout
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| cell(&row.cells[i], column.width))
            .collect();
        sink.emit(content_line(cells, &options, &pad));
    }
    sink.emit(border_line(&layout.columns, &options, &pad, BorderPosition::Bottom));
}

/// Renders `data` and collects the emitted lines.
pub fn render_lines(data: GridData) -> Vec<String> {
    let mut lines = Vec::new();
    render(data, &mut lines);
    lines
}

/// A cell: its text truncated to the column where needed, right-padded to
/// exactly the column width in visible characters.
fn cell(text: &str, width: usize) -> String {
    let mut cell = if visible_width(text) > width {
        truncate(text, width)
    } else {
        text.to_string()
    };
    let fill = width.saturating_sub(visible_width(&cell));
    cell.push_str(&" ".repeat(fill));
    cell
}

fn content_line(cells: Vec<String>, options: &GridOptions, pad: &str) -> String {
    let joint = format!("{}{}{}", pad, options.border.v, pad);
    format!(
        "{}{}{}{}{}",
        options.border.v,
        pad,
        cells.join(joint.as_str()),
        pad,
        options.border.v
    )
}

fn border_line(
    columns: &[ColumnLayout],
    options: &GridOptions,
    pad: &str,
    position: BorderPosition,
) -> String {
    let (left, mid, right) = options.border.line(position);
    let segments: Vec<String> = columns
        .iter()
        .map(|column| std::iter::repeat_n(options.border.h, column.width).collect())
        .collect();
    let joint = format!("{}{}{}", pad, mid, pad);
    format!("{}{}{}{}{}", left, pad, segments.join(joint.as_str()), pad, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_pads_to_width() {
        assert_eq!(cell("Bob", 5), "Bob  ");
        assert_eq!(cell("exact", 5), "exact");
    }

    #[test]
    fn cell_truncates_overflow() {
        let truncated = cell("a very long value", 8);
        assert_eq!(truncated, "a ver...");
        assert_eq!(visible_width(&truncated), 8);
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<String> = Vec::new();
        sink.emit("line".to_string());
        assert_eq!(sink, ["line"]);
    }

    #[test]
    fn io_sink_writes_lines() {
        let mut sink = IoSink(Vec::new());
        sink.emit("a".to_string());
        sink.emit("b".to_string());
        assert_eq!(String::from_utf8(sink.0).unwrap(), "a\nb\n");
    }
}

//! Render options and border glyph configuration.
//!
//! Defaults are an immutable value: [`GridOptions::default()`] is the
//! documented baseline, and `#[serde(default)]` merges a caller-supplied
//! option object over it key by key.

use serde::{Deserialize, Serialize};

/// Box-drawing glyphs for the grid border.
///
/// Eleven positions: the horizontal and vertical line glyphs plus corner
/// and junction glyphs for the top, middle, and bottom border rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderChars {
    pub h: char,
    pub v: char,
    pub top_left: char,
    pub top_mid: char,
    pub top_right: char,
    pub mid_left: char,
    pub mid_mid: char,
    pub mid_right: char,
    pub bottom_left: char,
    pub bottom_mid: char,
    pub bottom_right: char,
}

impl Default for BorderChars {
    fn default() -> Self {
        BorderChars {
            h: '─',
            v: '│',
            top_left: '┌',
            top_mid: '┬',
            top_right: '┐',
            mid_left: '├',
            mid_mid: '┼',
            mid_right: '┤',
            bottom_left: '└',
            bottom_mid: '┴',
            bottom_right: '┘',
        }
    }
}

impl BorderChars {
    /// ASCII fallback set: `-`, `|`, and `+` at every junction.
    pub fn ascii() -> Self {
        BorderChars {
            h: '-',
            v: '|',
            top_left: '+',
            top_mid: '+',
            top_right: '+',
            mid_left: '+',
            mid_mid: '+',
            mid_right: '+',
            bottom_left: '+',
            bottom_mid: '+',
            bottom_right: '+',
        }
    }

    /// Corner, junction, and corner glyphs for a horizontal border row.
    pub(crate) fn line(&self, position: BorderPosition) -> (char, char, char) {
        match position {
            BorderPosition::Top => (self.top_left, self.top_mid, self.top_right),
            BorderPosition::Mid => (self.mid_left, self.mid_mid, self.mid_right),
            BorderPosition::Bottom => (self.bottom_left, self.bottom_mid, self.bottom_right),
        }
    }
}

/// Which horizontal border row is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BorderPosition {
    Top,
    Mid,
    Bottom,
}

/// Options controlling sorting, tree display, and grid chrome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// Border glyph set.
    pub border: BorderChars,
    /// Suppress the header block and its separating border.
    pub hide_headers: bool,
    /// Spaces surrounding each cell and each border junction.
    pub padding: usize,
    /// Width cap for columns that do not declare their own `max_width`.
    pub default_max_width: usize,
    /// Column id to sort rows by; unset or unmatched leaves input order.
    pub sort_field: Option<String>,
    /// Sort direction.
    pub sort_asc: bool,
    /// Column id rendered with tree indentation.
    pub tree_id: Option<String>,
    /// Glyphs prepended to a tree cell after the indent.
    pub tree_icon: String,
    /// One indent unit, repeated per nesting level.
    pub tree_indent: String,
    /// Replacement text for missing cell values.
    pub null_placeholder: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            border: BorderChars::default(),
            hide_headers: false,
            padding: 1,
            default_max_width: 30,
            sort_field: None,
            sort_asc: false,
            tree_id: None,
            tree_icon: "|- ".to_string(),
            tree_indent: "   ".to_string(),
            null_placeholder: "-".to_string(),
        }
    }
}

impl GridOptions {
    /// Set the border glyph set.
    pub fn border(mut self, border: BorderChars) -> Self {
        self.border = border;
        self
    }

    /// Suppress or show the header block.
    pub fn hide_headers(mut self, hide: bool) -> Self {
        self.hide_headers = hide;
        self
    }

    /// Set the cell padding.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Set the fallback column width cap.
    pub fn default_max_width(mut self, width: usize) -> Self {
        self.default_max_width = width;
        self
    }

    /// Sort rows by `field`, ascending or descending.
    pub fn sort_by(mut self, field: impl Into<String>, asc: bool) -> Self {
        self.sort_field = Some(field.into());
        self.sort_asc = asc;
        self
    }

    /// Render `column_id` with tree indentation.
    pub fn tree(mut self, column_id: impl Into<String>) -> Self {
        self.tree_id = Some(column_id.into());
        self
    }

    /// Set the tree icon and indent unit.
    pub fn tree_glyphs(mut self, icon: impl Into<String>, indent: impl Into<String>) -> Self {
        self.tree_icon = icon.into();
        self.tree_indent = indent.into();
        self
    }

    /// Set the replacement for missing cell values.
    pub fn null_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.null_placeholder = placeholder.into();
        self
    }
}

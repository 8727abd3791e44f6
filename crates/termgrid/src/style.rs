//! Color helpers for cell text.
//!
//! Thin wrappers over [`console::Style`] with styling forced on, so the
//! escape sequences are emitted even when stdout is not a terminal and
//! rendered output stays deterministic. The emitted sequences are exactly
//! the ones [`visible_width`](crate::visible_width) excludes from width
//! calculations.
//!
//! # Example
//!
//! ```rust
//! use termgrid::{style, visible_width};
//!
//! let cell = style::red("Bob");
//! assert!(cell.starts_with('\x1b'));
//! assert_eq!(visible_width(&cell), 3);
//! ```

use console::Style;

fn styled(text: &str, style: Style) -> String {
    style.force_styling(true).apply_to(text).to_string()
}

/// Red foreground.
pub fn red(text: &str) -> String {
    styled(text, Style::new().red())
}

/// Green foreground.
pub fn green(text: &str) -> String {
    styled(text, Style::new().green())
}

/// Yellow foreground.
pub fn yellow(text: &str) -> String {
    styled(text, Style::new().yellow())
}

/// Blue foreground.
pub fn blue(text: &str) -> String {
    styled(text, Style::new().blue())
}

/// Magenta foreground.
pub fn magenta(text: &str) -> String {
    styled(text, Style::new().magenta())
}

/// Cyan foreground.
pub fn cyan(text: &str) -> String {
    styled(text, Style::new().cyan())
}

/// Bold weight.
pub fn bold(text: &str) -> String {
    styled(text, Style::new().bold())
}

/// Dim weight.
pub fn dim(text: &str) -> String {
    styled(text, Style::new().dim())
}

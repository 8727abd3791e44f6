//! Text measurement and truncation aware of embedded color escapes.
//!
//! Cell text may carry terminal color escape sequences (`ESC[<n>m`); they
//! must not count toward a cell's visible width, and truncation has to keep
//! them out of the width math while cutting. The measurement contract is a
//! plain `char` count of the color-stripped string, so the padded output
//! lines up byte for byte with the widths the layout computed.

use once_cell::sync::Lazy;
use regex::Regex;

static COLOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new("\u{1b}\\[[0-9]+m").unwrap());

/// Removes every color escape sequence (`ESC [ digits m`) from `s`.
///
/// # Example
///
/// ```rust
/// use termgrid::strip_color;
///
/// assert_eq!(strip_color("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(strip_color("plain"), "plain");
/// ```
pub fn strip_color(s: &str) -> String {
    COLOR_RE.replace_all(s, "").into_owned()
}

/// Visible width of `s`: its `char` count after color escapes are removed.
///
/// # Example
///
/// ```rust
/// use termgrid::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn visible_width(s: &str) -> usize {
    strip_color(s).chars().count()
}

/// First `n` chars of the color-stripped `s`.
fn stripped_prefix(s: &str, n: usize) -> String {
    strip_color(s).chars().take(n).collect()
}

/// Truncates `s` to fit `width` visible characters, ending in `...` when
/// anything was cut.
///
/// Prefers breaking at a space boundary: whole space-delimited tokens are
/// kept while they stay under the margin reserved for the joining space
/// and the ellipsis block, then the remaining tail is cut to the residual
/// width. A first token wider than the whole column is hard-cut instead,
/// dropping its color escapes. Strings that already fit are returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use termgrid::truncate;
///
/// assert_eq!(truncate("The quick brown fox jumps", 10), "The qui...");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(s: &str, width: usize) -> String {
    if visible_width(s) <= width {
        return s.to_string();
    }

    let mut tokens = s.split(' ');
    let mut item = tokens.next().unwrap_or("").to_string();

    if visible_width(&item) > width {
        let mut cut = stripped_prefix(&item, width.saturating_sub(3));
        cut.push_str("...");
        return cut;
    }

    let rest: Vec<&str> = tokens.collect();
    let mut taken = 0;
    while taken < rest.len() {
        let probe = format!("{}{}", item, rest[taken]);
        if visible_width(&probe) >= width.saturating_sub(4) {
            break;
        }
        item.push(' ');
        item.push_str(rest[taken]);
        taken += 1;
    }

    // One column reserved for the space joining the tail on.
    let used = visible_width(&item) + 1;
    let tail = strip_color(&rest[taken..].join(" "));
    let keep = width.saturating_sub(used);
    let mut cut: String = tail.chars().take(keep.saturating_sub(3)).collect();
    cut.push_str("...");
    item.push(' ');
    item.push_str(&cut);
    item
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn truncate_is_idempotent(
            s in "[a-zA-Z0-9 ]{0,60}",
            width in 3usize..40,
        ) {
            let once = truncate(&s, width);
            prop_assert_eq!(truncate(&once, width), once);
        }

        #[test]
        fn truncate_respects_width(
            s in "[a-zA-Z0-9]{1,4}( [a-zA-Z0-9]{1,4}){0,12}",
            width in 8usize..40,
        ) {
            let result = truncate(&s, width);
            prop_assert!(
                visible_width(&result) <= width,
                "'{}' has width {}, max was {}",
                result, visible_width(&result), width
            );
        }

        #[test]
        fn truncate_preserves_fitting_strings(
            s in "[a-zA-Z0-9 ]{0,20}",
            extra in 0usize..20,
        ) {
            let width = visible_width(&s) + extra;
            prop_assert_eq!(truncate(&s, width), s);
        }

        #[test]
        fn truncated_output_ends_in_ellipsis(
            s in "[a-zA-Z0-9]{10,40}",
            width in 3usize..9,
        ) {
            let result = truncate(&s, width);
            prop_assert!(result.ends_with("..."));
        }
    }
}

//! Row ordering: type-dispatched comparators applied level by level.
//!
//! Sorting is sibling-local. The top-level row list and every `subs` list
//! below it are each sorted with the same comparator; nodes never move
//! between levels. Blank values cluster at one end regardless of the sort
//! direction, a deliberate display invariant carried by
//! `sort_blank_factor` independently of the direction multiplier.

use std::cmp::Ordering;

use serde_json::Value;

use crate::column::Column;
use crate::options::GridOptions;

/// Per-comparison options handed to every comparator.
#[derive(Clone, Copy, Debug)]
pub struct SortOptions<'a> {
    /// Field the rows are compared on.
    pub sort_field: &'a str,
    /// Direction as a sign multiplier: `-1` ascending, `1` descending.
    pub sort_factor: i32,
    /// Sign controlling which end blank values cluster at; applied
    /// instead of `sort_factor` whenever a blank is involved.
    pub sort_blank_factor: i32,
}

/// Comparator signature: two rows plus the sort options.
pub type Comparer = fn(&Value, &Value, &SortOptions<'_>) -> Ordering;

/// Resolves the comparator registered for a column type tag. Untyped and
/// unknown tags compare as strings.
pub fn comparer_for(kind: Option<&str>) -> Comparer {
    match kind {
        Some("number") => compare_numbers,
        _ => compare_strings,
    }
}

/// Sorts the row forest in place according to `options.sort_field`.
///
/// A missing or unmatched sort field leaves the original order intact
/// everywhere.
pub fn sort_rows(rows: &mut [Value], columns: &[Column], options: &GridOptions) {
    let Some(column) = sort_column(columns, options) else {
        return;
    };
    let comparer = comparer_for(column.kind.as_deref());
    let sort_options = SortOptions {
        sort_field: &column.id,
        sort_factor: if options.sort_asc { -1 } else { 1 },
        sort_blank_factor: 1,
    };
    sort_level(rows, comparer, &sort_options);
}

fn sort_column<'a>(columns: &'a [Column], options: &GridOptions) -> Option<&'a Column> {
    let field = options.sort_field.as_deref().filter(|f| !f.is_empty())?;
    columns.iter().find(|column| column.id == field)
}

fn sort_level(list: &mut [Value], comparer: Comparer, options: &SortOptions<'_>) {
    if list.len() > 1 {
        list.sort_by(|a, b| comparer(a, b, options));
    }
    for row in list {
        if let Some(Value::Array(subs)) = row.get_mut("subs") {
            sort_level(subs, comparer, options);
        }
    }
}

fn directed(ordering: Ordering, factor: i32) -> Ordering {
    if factor < 0 {
        ordering.reverse()
    } else {
        ordering
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Shared blank handling; `None` when both values are present.
fn blank_ordering(
    a: Option<&Value>,
    b: Option<&Value>,
    options: &SortOptions<'_>,
) -> Option<Ordering> {
    match (is_blank(a), is_blank(b)) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(directed(Ordering::Greater, options.sort_blank_factor)),
        (false, true) => Some(directed(Ordering::Less, options.sort_blank_factor)),
        (false, false) => None,
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn number_of(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn compare_strings(a: &Value, b: &Value, options: &SortOptions<'_>) -> Ordering {
    let av = a.get(options.sort_field);
    let bv = b.get(options.sort_field);
    if let Some(ordering) = blank_ordering(av, bv, options) {
        return ordering;
    }
    directed(text_of(bv).cmp(&text_of(av)), options.sort_factor)
}

fn compare_numbers(a: &Value, b: &Value, options: &SortOptions<'_>) -> Ordering {
    let av = a.get(options.sort_field);
    let bv = b.get(options.sort_field);
    // Non-numeric values sort with the blanks.
    match (number_of(av), number_of(bv)) {
        (Some(x), Some(y)) => directed(
            y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            options.sort_factor,
        ),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => directed(Ordering::Greater, options.sort_blank_factor),
        (Some(_), None) => directed(Ordering::Less, options.sort_blank_factor),
    }
}

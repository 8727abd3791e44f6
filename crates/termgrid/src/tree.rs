//! Pre-order traversal and flattening of the row forest.

use serde_json::Value;

/// Visitor verdict controlling traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking.
    Continue,
    /// Abort the whole traversal immediately, from any depth.
    Stop,
}

/// Child list of `row`, if any.
///
/// A `subs` value that is present but not an array means no children
/// rather than an error; offenders are traced for diagnosis.
pub(crate) fn subs_of(row: &Value) -> Option<&Vec<Value>> {
    match row.get("subs") {
        Some(Value::Array(subs)) => Some(subs),
        None => None,
        Some(other) => {
            log::trace!("ignoring non-array subs value: {}", other);
            None
        }
    }
}

/// Walks the forest depth-first, pre-order: each node before its
/// children, children before the next sibling.
///
/// The visitor receives the node, its index among its siblings, and its
/// nesting level (0 for roots). Returning [`Visit::Stop`] ends the whole
/// traversal.
pub fn walk<'a, F>(roots: &'a [Value], visitor: &mut F) -> Visit
where
    F: FnMut(&'a Value, usize, usize) -> Visit,
{
    walk_level(roots, 0, visitor)
}

fn walk_level<'a, F>(list: &'a [Value], level: usize, visitor: &mut F) -> Visit
where
    F: FnMut(&'a Value, usize, usize) -> Visit,
{
    for (sibling, node) in list.iter().enumerate() {
        if visitor(node, sibling, level) == Visit::Stop {
            return Visit::Stop;
        }
        if let Some(subs) = subs_of(node) {
            if walk_level(subs, level + 1, visitor) == Visit::Stop {
                return Visit::Stop;
            }
        }
    }
    Visit::Continue
}

/// A row in the flattened render sequence.
#[derive(Clone, Copy, Debug)]
pub struct FlatRow<'a> {
    /// The underlying row record.
    pub node: &'a Value,
    /// Nesting depth: 0 for roots, parent level plus one below.
    pub level: usize,
    /// Position in the flattened sequence.
    pub index: usize,
}

/// Flattens the (already ordered) forest into the render sequence.
pub fn flatten(roots: &[Value]) -> Vec<FlatRow<'_>> {
    let mut flat = Vec::new();
    walk(roots, &mut |node, _sibling, level| {
        let index = flat.len();
        flat.push(FlatRow { node, level, index });
        Visit::Continue
    });
    flat
}

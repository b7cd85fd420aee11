//! Locate every node of a JSON value tree that matches a target.
//!
//! A node matches when it equals the target, or when both are strings and the
//! node contains the target as a substring. Matches are reported as [`Path`]s
//! from the root, in depth-first order; object keys are visited in document
//! order because `serde_json` is built with `preserve_order`.

use serde_json::{Number, Value};
use tracing::{debug, instrument, trace};

use crate::path::Path;

/// Composite match rule. A node satisfying both branches is still one match.
pub fn is_match(node: &Value, target: &Value) -> bool {
    if values_equal(node, target) {
        return true;
    }
    match (node, target) {
        (Value::String(haystack), Value::String(needle)) => haystack.contains(needle.as_str()),
        _ => false,
    }
}

/// Deep value equality. Numbers compare by value so `1` and `1.0` are equal;
/// object comparison ignores key order.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).map_or(false, |y| values_equal(x, y)))
        }
        _ => false,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    // Integers compare exactly so large u64/i64 values don't collide through f64.
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    if (x.is_i64() || x.is_u64()) && (y.is_i64() || y.is_u64()) {
        // one negative, one above i64::MAX
        return false;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Visit `node` and everything below it, calling `on_match` once with the
/// full path of each matching node.
///
/// `current_path` is the path of `node` itself; pass [`Path::root()`] at the
/// top level. It is never modified, every child gets its own extended copy.
pub fn find<F>(node: &Value, target: &Value, current_path: &Path, on_match: &mut F)
where
    F: FnMut(Path),
{
    if is_match(node, target) {
        trace!(target: "json_pathfind::finder", path = %current_path, "match");
        on_match(current_path.clone());
    }

    match node {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                find(item, target, &current_path.child(i), on_match);
            }
        }
        Value::Object(entries) => {
            for (key, value) in entries {
                find(value, target, &current_path.child(key.as_str()), on_match);
            }
        }
        _ => {}
    }
}

/// Collect the paths of every match under `root`, in visitation order.
#[instrument(target = "json_pathfind::finder", skip(root, target))]
pub fn find_all(root: &Value, target: &Value) -> Vec<Path> {
    let mut paths = Vec::new();
    find(root, target, &Path::root(), &mut |p| paths.push(p));
    debug!(target: "json_pathfind::finder", matches = paths.len(), "search complete");
    paths
}

/// Number of matching nodes under `root`.
#[instrument(target = "json_pathfind::finder", skip(root, target))]
pub fn count_matches(root: &Value, target: &Value) -> usize {
    let mut count = 0usize;
    find(root, target, &Path::root(), &mut |_| count += 1);
    debug!(target: "json_pathfind::finder", matches = count, "search complete");
    count
}

/// A target bound once and searched for across any number of trees.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'t> {
    target: &'t Value,
}

impl<'t> PathFinder<'t> {
    pub fn new(target: &'t Value) -> Self {
        Self { target }
    }

    pub fn matches(&self, node: &Value) -> bool {
        is_match(node, self.target)
    }

    pub fn find_in(&self, root: &Value) -> Vec<Path> {
        find_all(root, self.target)
    }

    /// Streaming form: hand each path to `on_match` as it is found.
    pub fn for_each_match<F>(&self, root: &Value, mut on_match: F)
    where
        F: FnMut(Path),
    {
        find(root, self.target, &Path::root(), &mut on_match);
    }

    pub fn count_in(&self, root: &Value) -> usize {
        count_matches(root, self.target)
    }
}

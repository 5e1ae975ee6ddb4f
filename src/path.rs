//! Dotted-path resolution into a data record.

use serde_json::Value;

/// Resolves a `.`-separated path against a nested JSON value.
///
/// Each segment is looked up as an object key first; on an array the segment
/// must parse as a 0-based integer index. Numeric object keys (e.g. the
/// 1-based member keys of a counted collection like `thirdParties.1.name`)
/// therefore resolve as plain key lookups.
///
/// Total over any path string: a missing intermediate segment yields `None`,
/// never a panic, so callers can fall back to field defaults.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

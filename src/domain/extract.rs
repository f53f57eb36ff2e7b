//! Ordered path probing over untyped JSON payloads.
//!
//! Both counterpart platforms have shipped several shapes for the same field, so
//! every field is described by a list of dotted paths tried in priority order.
//! Numeric segments index into arrays (`attachments.0.url`).

use serde_json::Value;

/// Resolves a single dotted path.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }

    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// First path that yields a non-empty string (after trimming).
pub fn first_str<'a, P>(root: &'a Value, paths: &[P]) -> Option<&'a str>
where
    P: AsRef<str>,
{
    paths
        .iter()
        .filter_map(|path| lookup(root, path.as_ref()))
        .filter_map(Value::as_str)
        .find(|value| !value.trim().is_empty())
}

/// Like [`first_str`] but also accepts numbers, rendered as their JSON text.
/// Providers send phone numbers and ids either way.
pub fn first_scalar<P>(root: &Value, paths: &[P]) -> Option<String>
where
    P: AsRef<str>,
{
    paths
        .iter()
        .filter_map(|path| lookup(root, path.as_ref()))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// First path holding an integer, or a string that parses as one.
pub fn first_i64<P>(root: &Value, paths: &[P]) -> Option<i64>
where
    P: AsRef<str>,
{
    paths
        .iter()
        .filter_map(|path| lookup(root, path.as_ref()))
        .find_map(|value| match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

/// Joins a prefix and a key into a dotted path, treating an empty prefix as the root.
pub fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

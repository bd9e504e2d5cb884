//! Dotted-path flattening of nested configuration trees.
//!
//! [`flatten`] and [`unflatten`] share the single [`PATH_SEPARATOR`] rule,
//! so the two directions are exact inverses on trees whose keys contain no
//! separator. Sequences are leaves: the walk never descends into them.

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};

/// Separator between path segments in flattened keys.
pub const PATH_SEPARATOR: char = '.';

/// Human-readable kind of a YAML value, used in error messages and
/// kind-compatibility checks.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Flatten a nested mapping into `(dotted path, leaf value)` pairs,
/// preserving key order.
///
/// A leaf is anything that is not a non-empty mapping; empty mappings are
/// kept as leaves so the round trip through [`unflatten`] is lossless.
pub fn flatten(value: &Value) -> Result<Vec<(String, Value)>> {
    let Value::Mapping(map) = value else {
        return Err(Error::NotAMapping {
            found: value_kind(value),
        });
    };
    let mut out = Vec::new();
    flatten_into(map, "", &mut out)?;
    Ok(out)
}

fn flatten_into(map: &Mapping, prefix: &str, out: &mut Vec<(String, Value)>) -> Result<()> {
    for (key, value) in map {
        let Some(key) = key.as_str() else {
            return Err(Error::NonStringKey {
                path: prefix.to_string(),
            });
        };
        let path = join_path(prefix, key);
        match value {
            Value::Mapping(child) if !child.is_empty() => flatten_into(child, &path, out)?,
            leaf => out.push((path, leaf.clone())),
        }
    }
    Ok(())
}

/// Rebuild a nested mapping from `(dotted path, leaf value)` pairs.
///
/// Inverse of [`flatten`]: section order follows first appearance of each
/// path prefix.
pub fn unflatten<I>(pairs: I) -> Value
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut root = Mapping::new();
    for (path, value) in pairs {
        insert_path(&mut root, &path, value);
    }
    Value::Mapping(root)
}

fn insert_path(map: &mut Mapping, path: &str, value: Value) {
    match path.split_once(PATH_SEPARATOR) {
        None => {
            map.insert(Value::String(path.to_string()), value);
        }
        Some((head, rest)) => {
            let slot = map
                .entry(Value::String(head.to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !matches!(slot, Value::Mapping(_)) {
                *slot = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(child) = slot {
                insert_path(child, rest, value);
            }
        }
    }
}

pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{key}")
    }
}

//! Flattening of nested YAML mappings into dotted key-paths.
//!
//! Only mapping values are descended into. Scalars, nulls, sequences and
//! tagged values are leaves and produce the path of their key:
//!
//! ```text
//! title: Hello            -> title
//! Auth:
//!   Login:
//!     button: Submit      -> Auth.Login.button
//!   benefits: [Fast, Easy] -> Auth.benefits
//! ```

use serde_yaml::{Mapping, Value};

use super::{error::ShapeError, keys::KeyPaths};

/// Flatten `mapping` into the dotted paths of all its leaves.
///
/// Paths are emitted in the mapping's definition order. A path that can be
/// reached twice (a literal `"b.c"` key next to a nested `b: {c: ..}`) is
/// recorded once, at its first position.
pub fn flatten(mapping: &Mapping) -> Result<KeyPaths, ShapeError> {
    let mut keys = KeyPaths::new();
    flatten_mapping(mapping, None, &mut keys)?;
    Ok(keys)
}

fn flatten_mapping(
    mapping: &Mapping,
    prefix: Option<&str>,
    result: &mut KeyPaths,
) -> Result<(), ShapeError> {
    for (key, value) in mapping {
        let segment = key_segment(key).ok_or_else(|| ShapeError::UnsupportedKey {
            parent: prefix.unwrap_or_default().to_string(),
        })?;
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, segment),
            None => segment,
        };

        match value {
            Value::Mapping(nested) => flatten_mapping(nested, Some(&path), result)?,
            _ => {
                result.insert(path);
            }
        }
    }
    Ok(())
}

/// Render a mapping key as a path segment.
///
/// Returns `None` for sequence and mapping keys.
pub fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => key_segment(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

use std::{fs, path::Path};

use serde::Deserialize;
use serde_yaml::{Deserializer, Mapping, Value};

use crate::core::{
    error::{CollectError, ShapeError},
    flatten::key_segment,
};

/// Read and decode a YAML document, resolving `<<` merge keys.
///
/// Content that is not valid UTF-8 is a parse error, not a read error.
pub fn read_document(path: &Path) -> Result<Value, CollectError> {
    let content = fs::read(path).map_err(|e| CollectError::io(path, e))?;
    parse_document(content).map_err(|e| CollectError::parse(path, e))
}

/// Decode the first document of a YAML stream.
///
/// Later documents (after a `---` separator) are ignored. An empty stream
/// decodes to `Value::Null`.
pub fn parse_document(content: impl AsRef<[u8]>) -> Result<Value, serde_yaml::Error> {
    let mut document = match Deserializer::from_slice(content.as_ref()).next() {
        Some(first) => Value::deserialize(first)?,
        None => Value::Null,
    };
    document.apply_merge()?;
    Ok(document)
}

/// Get the value of the document's first top-level key.
///
/// Locale files conventionally nest everything under one key:
///
/// ```yaml
/// en:
///   Common:
///     submit: Submit
/// ```
///
/// The first entry wins by definition order, whatever its key is called.
pub fn namespace_value(document: &Value) -> Result<&Mapping, ShapeError> {
    let Value::Mapping(top) = document else {
        return Err(ShapeError::NotAMapping);
    };
    let (key, value) = top.iter().next().ok_or(ShapeError::EmptyDocument)?;

    match value {
        Value::Mapping(namespace) => Ok(namespace),
        _ => Err(ShapeError::NamespaceNotAMapping {
            key: key_segment(key).unwrap_or_else(|| "<complex key>".to_string()),
        }),
    }
}

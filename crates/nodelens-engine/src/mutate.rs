//! Path resolution and in-place-semantics mutation of a JSON document.
//!
//! [`mutate`] clones the document before touching anything, so the caller's
//! value stays intact on success and failure alike: no other holder of the
//! original reference can ever observe a partially mutated tree.

use serde_json::{Map, Value};

use nodelens_path::{format_path, PathStep};

use crate::types::EngineError;

fn mismatch(prefix: &[PathStep]) -> EngineError {
    EngineError::TypeMismatch {
        pointer: format_path(prefix),
    }
}

/// Resolve a path to the value it addresses, if any.
///
/// # Example
///
/// ```
/// use nodelens_engine::mutate::resolve;
/// use nodelens_path::PathStep;
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2, 3]});
/// let path = vec![PathStep::key("a"), PathStep::index(1)];
/// assert_eq!(resolve(&doc, &path), Some(&json!(2)));
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        current = match (step, current) {
            (PathStep::Key(k), Value::Object(map)) => map.get(k)?,
            (PathStep::Index(i), Value::Array(arr)) => arr.get(*i)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Set the value at `path` inside a copy of `doc` and return the copy.
///
/// The empty path replaces the whole document. While descending, a `Key` step
/// whose property is missing auto-vivifies an empty object there first; an
/// `Index` step never vivifies or extends - the index must be in range of an
/// existing array. A step whose container kind disagrees with the value found
/// fails with [`EngineError::TypeMismatch`] carrying the pointer prefix at
/// which resolution stopped.
///
/// `doc` itself is never modified.
pub fn mutate(doc: &Value, path: &[PathStep], new_value: Value) -> Result<Value, EngineError> {
    if path.is_empty() {
        return Ok(new_value);
    }

    let mut root = doc.clone();
    let (walk, last) = path.split_at(path.len() - 1);
    let mut cursor: &mut Value = &mut root;

    for (depth, step) in walk.iter().enumerate() {
        cursor = match (step, cursor) {
            (PathStep::Key(k), Value::Object(map)) => map
                .entry(k.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            (PathStep::Index(i), Value::Array(arr)) => {
                arr.get_mut(*i).ok_or_else(|| mismatch(&path[..=depth]))?
            }
            _ => return Err(mismatch(&path[..=depth])),
        };
    }

    match (&last[0], cursor) {
        (PathStep::Key(k), Value::Object(map)) => {
            map.insert(k.clone(), new_value);
        }
        (PathStep::Index(i), Value::Array(arr)) => {
            let slot = arr.get_mut(*i).ok_or_else(|| mismatch(path))?;
            *slot = new_value;
        }
        _ => return Err(mismatch(path)),
    }

    Ok(root)
}

//! Canonical JSON text for a node's row set.
//!
//! The canonical text seeds both the read-only display surface and the edit
//! surface. Rows whose kind is array or object are excluded from the mapping:
//! those locations are rendered by their own child nodes elsewhere in the
//! graph, not inline here.

use indexmap::IndexMap;
use serde_json::Value;

use crate::types::{EngineError, NodeView, RowKind};

/// Produce the canonical JSON text for a node's rows. Pure.
///
/// - No rows → `"{}"` (an empty object).
/// - Exactly one keyless row → the value as a JSON scalar literal (strings
///   quoted and escaped, numbers and booleans in literal form).
/// - Otherwise → the keyed primitive rows as an indented JSON object, key
///   order equal to row order.
///
/// # Errors
///
/// Returns [`EngineError::Serialization`] if serialization fails.
///
/// # Example
///
/// ```
/// use nodelens_engine::normalize::canonical_text;
/// use nodelens_engine::types::{NodeRow, NodeView, RowKind};
/// use serde_json::json;
///
/// let view = NodeView::new(
///     vec![],
///     vec![
///         NodeRow::keyed("x", json!("hi"), RowKind::Primitive),
///         NodeRow::keyed("y", json!([1, 2]), RowKind::Array),
///     ],
/// );
/// assert_eq!(canonical_text(&view).unwrap(), "{\n  \"x\": \"hi\"\n}");
/// ```
pub fn canonical_text(view: &NodeView) -> Result<String, EngineError> {
    if view.rows.is_empty() {
        return Ok("{}".to_string());
    }

    if view.is_scalar() {
        return serde_json::to_string(&view.rows[0].value)
            .map_err(|e| EngineError::Serialization(e.to_string()));
    }

    let mut map: IndexMap<&str, &Value> = IndexMap::new();
    for row in &view.rows {
        if matches!(row.kind, RowKind::Array | RowKind::Object) {
            continue;
        }
        let Some(key) = row.key.as_deref() else {
            continue;
        };
        map.insert(key, &row.value);
    }

    serde_json::to_string_pretty(&map).map_err(|e| EngineError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeRow;
    use serde_json::json;

    #[test]
    fn test_empty_rows_render_empty_object() {
        let view = NodeView::new(vec![], vec![]);
        assert_eq!(canonical_text(&view).unwrap(), "{}");
    }

    #[test]
    fn test_scalar_string_is_quoted_and_escaped() {
        let view = NodeView::new(vec![], vec![NodeRow::scalar(json!("he said \"hi\"\n"))]);
        assert_eq!(
            canonical_text(&view).unwrap(),
            "\"he said \\\"hi\\\"\\n\""
        );
    }

    #[test]
    fn test_scalar_literals() {
        let number = NodeView::new(vec![], vec![NodeRow::scalar(json!(42.5))]);
        assert_eq!(canonical_text(&number).unwrap(), "42.5");

        let boolean = NodeView::new(vec![], vec![NodeRow::scalar(json!(true))]);
        assert_eq!(canonical_text(&boolean).unwrap(), "true");

        let null = NodeView::new(vec![], vec![NodeRow::scalar(json!(null))]);
        assert_eq!(canonical_text(&null).unwrap(), "null");
    }

    #[test]
    fn test_container_rows_are_excluded() {
        let view = NodeView::new(
            vec![],
            vec![
                NodeRow::keyed("x", json!("hi"), RowKind::Primitive),
                NodeRow::keyed("y", json!([1, 2]), RowKind::Array),
                NodeRow::keyed("z", json!({"a": 1}), RowKind::Object),
            ],
        );
        let text = canonical_text(&view).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({"x": "hi"}));
    }

    #[test]
    fn test_keyless_row_among_keyed_rows_is_skipped() {
        let view = NodeView::new(
            vec![],
            vec![
                NodeRow::keyed("a", json!(1), RowKind::Primitive),
                NodeRow::scalar(json!("stray")),
            ],
        );
        let parsed: Value = serde_json::from_str(&canonical_text(&view).unwrap()).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_key_order_follows_row_order() {
        let view = NodeView::new(
            vec![],
            vec![
                NodeRow::keyed("zebra", json!(1), RowKind::Primitive),
                NodeRow::keyed("apple", json!(2), RowKind::Primitive),
                NodeRow::keyed("mango", json!(3), RowKind::Primitive),
            ],
        );
        let text = canonical_text(&view).unwrap();
        let z = text.find("zebra").unwrap();
        let a = text.find("apple").unwrap();
        let m = text.find("mango").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_all_container_rows_render_empty_object() {
        let view = NodeView::new(
            vec![],
            vec![NodeRow::keyed("y", json!([1]), RowKind::Array)],
        );
        assert_eq!(canonical_text(&view).unwrap(), "{}");
    }
}

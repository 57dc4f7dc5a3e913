//! Reference graph-rebuild collaborator.
//!
//! The engine treats node-set rebuild as external work behind the
//! [`GraphRebuild`] seam. [`TreeRebuild`] is the in-crate implementation:
//! it derives one [`NodeView`] per container in the document (plus a single
//! scalar view when the root itself is a scalar), with container-valued rows
//! carrying a short structural placeholder instead of their subtree.

use serde_json::Value;

use nodelens_path::{Path, PathStep};

use crate::sync::GraphRebuild;
use crate::types::{NodeRow, NodeView, RowKind};

/// Rebuilds the node set by walking the parsed document tree.
///
/// Unparseable text yields an empty node set; the coordinator surfaces the
/// parse failure separately on save.
pub struct TreeRebuild;

impl GraphRebuild for TreeRebuild {
    fn rebuild(&mut self, text: &str) -> Vec<NodeView> {
        let Ok(doc) = serde_json::from_str::<Value>(text) else {
            return Vec::new();
        };
        let mut nodes = Vec::new();
        let mut path = Path::new();
        collect(&doc, &mut path, &mut nodes);
        nodes
    }
}

/// Placeholder shown for a container-valued row; the subtree itself is
/// rendered by the container's own node.
fn placeholder(val: &Value) -> Value {
    match val {
        Value::Object(map) => Value::String(format!("{{…}} {} keys", map.len())),
        Value::Array(arr) => Value::String(format!("[…] {} items", arr.len())),
        _ => val.clone(),
    }
}

fn row(key: String, val: &Value) -> NodeRow {
    NodeRow::keyed(key, placeholder(val), RowKind::of(val))
}

fn collect(value: &Value, path: &mut Path, out: &mut Vec<NodeView>) {
    match value {
        Value::Object(map) => {
            let rows = map.iter().map(|(k, v)| row(k.clone(), v)).collect();
            out.push(NodeView::new(path.clone(), rows));
            for (k, v) in map {
                if v.is_object() || v.is_array() {
                    path.push(PathStep::key(k.clone()));
                    collect(v, path, out);
                    path.pop();
                }
            }
        }
        Value::Array(arr) => {
            let rows = arr
                .iter()
                .enumerate()
                .map(|(i, v)| row(i.to_string(), v))
                .collect();
            out.push(NodeView::new(path.clone(), rows));
            for (i, v) in arr.iter().enumerate() {
                if v.is_object() || v.is_array() {
                    path.push(PathStep::index(i));
                    collect(v, path, out);
                    path.pop();
                }
            }
        }
        // Scalar root: the document is itself a single scalar node
        _ => out.push(NodeView::new(
            path.clone(),
            vec![NodeRow::scalar(value.clone())],
        )),
    }
}

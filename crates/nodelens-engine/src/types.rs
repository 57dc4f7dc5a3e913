//! Core types for the node inspection engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use nodelens_path::{Path, PathStep};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The authoritative document text is not valid JSON. Nothing is touched.
    #[error("INVALID_DOCUMENT: {0}")]
    InvalidDocument(String),
    /// The edited text is not valid JSON and strict parsing is in effect.
    #[error("INVALID_EDIT: {0}")]
    InvalidEdit(String),
    /// A path step's container kind disagrees with the value found during
    /// mutation, or an array index is out of range.
    #[error("TYPE_MISMATCH at {pointer}")]
    TypeMismatch { pointer: String },
    /// A save was attempted with no node selected.
    #[error("NO_SELECTION")]
    NoSelection,
    /// Re-serializing the mutated tree failed.
    #[error("SERIALIZATION: {0}")]
    Serialization(String),
}

// ── Node rows ─────────────────────────────────────────────────────────────

/// Coarse type tag of one displayed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Primitive,
    Array,
    Object,
}

impl RowKind {
    /// Classify a JSON value into its coarse row kind.
    pub fn of(val: &Value) -> Self {
        match val {
            Value::Object(_) => RowKind::Object,
            Value::Array(_) => RowKind::Array,
            _ => RowKind::Primitive,
        }
    }
}

/// One displayed field of a graph node.
///
/// `value` holds the JSON scalar for primitive rows; for array/object rows it
/// holds a structural placeholder, since those rows are rendered by their own
/// child nodes elsewhere in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: Value,
    pub kind: RowKind,
}

impl NodeRow {
    /// Build a keyed row.
    pub fn keyed(key: impl Into<String>, value: Value, kind: RowKind) -> Self {
        NodeRow {
            key: Some(key.into()),
            value,
            kind,
        }
    }

    /// Build the single keyless row of a scalar node.
    pub fn scalar(value: Value) -> Self {
        NodeRow {
            key: None,
            value,
            kind: RowKind::Primitive,
        }
    }
}

/// The denormalized representation of one graph node: its displayed rows and
/// the path of the JSON location the row set represents.
///
/// Produced fresh by the graph-rebuild collaborator every time the document
/// changes; the engine only reads it. Zero rows represent an empty object.
/// Exactly one keyless row means the node is itself a scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub path: Path,
    pub rows: Vec<NodeRow>,
}

impl NodeView {
    pub fn new(path: Path, rows: Vec<NodeRow>) -> Self {
        NodeView { path, rows }
    }

    /// True when the node represents a single scalar value rather than a
    /// container.
    pub fn is_scalar(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].key.is_none()
    }
}

// ── Parse mode ────────────────────────────────────────────────────────────

/// How edited text that fails to parse as JSON is treated on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Coerce non-JSON edited text into a JSON string value. A bare word
    /// typed into the editor becomes a string instead of being rejected.
    #[default]
    Lenient,
    /// Reject non-JSON edited text with [`EngineError::InvalidEdit`].
    Strict,
}

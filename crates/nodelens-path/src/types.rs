//! Type definitions for path addresses.

use serde::{Deserialize, Serialize};

/// One step of a path address.
///
/// A step is either an object property name or an array index. The tag is
/// load-bearing: a `Key` step may only be resolved against a JSON object and
/// an `Index` step only against a JSON array, so every traversal can check the
/// container kind exhaustively instead of re-interpreting a string.
///
/// Serializes untagged, so a path renders as e.g. `["users", 0, "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    /// An object property name.
    Key(String),
    /// A non-negative array index.
    Index(usize),
}

/// A path address: an ordered sequence of steps locating a value inside a
/// JSON tree. The empty path addresses the document root.
pub type Path = Vec<PathStep>;

impl PathStep {
    /// Build a property-name step.
    pub fn key(key: impl Into<String>) -> Self {
        PathStep::Key(key.into())
    }

    /// Build an array-index step.
    pub fn index(index: usize) -> Self {
        PathStep::Index(index)
    }

    /// The property name, if this is a `Key` step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathStep::Key(k) => Some(k),
            PathStep::Index(_) => None,
        }
    }

    /// The array index, if this is an `Index` step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Key(_) => None,
            PathStep::Index(i) => Some(*i),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_string())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

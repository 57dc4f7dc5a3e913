//! nodelens-engine — path-addressed JSON mutation engine for a graph node
//! inspector.
//!
//! The engine behind a JSON graph editor's node-inspection-and-edit panel:
//!
//! - [`normalize::canonical_text`] turns a node's denormalized row list back
//!   into canonical JSON text for display and edit seeding.
//! - [`mutate::mutate`] performs an in-place-semantics update at a
//!   [`nodelens_path::Path`] inside a previously parsed document, on a copy,
//!   preserving the rest of the tree.
//! - [`sync::SyncCoordinator`] orchestrates the full edit-and-commit cycle
//!   and re-resolves the selection by path equality after every rebuild.
//!
//! Rendering, layout, persistence, and history are external collaborators;
//! the engine only touches document text and the selection key.
//!
//! # Example
//!
//! ```
//! use nodelens_engine::rebuild::TreeRebuild;
//! use nodelens_engine::sync::SyncCoordinator;
//! use nodelens_path::PathStep;
//!
//! let mut c = SyncCoordinator::new(r#"{"user": {"name": "ada"}}"#, TreeRebuild);
//! c.select(Some(vec![PathStep::key("user")]));
//! c.start_edit().unwrap();
//! c.save(r#"{"name": "grace"}"#).unwrap();
//!
//! let doc: serde_json::Value = serde_json::from_str(c.document()).unwrap();
//! assert_eq!(doc, serde_json::json!({"user": {"name": "grace"}}));
//! ```

pub mod mutate;
pub mod normalize;
pub mod rebuild;
pub mod sync;
pub mod types;

pub use mutate::{mutate, resolve};
pub use normalize::canonical_text;
pub use rebuild::TreeRebuild;
pub use sync::{EditState, GraphRebuild, SyncCoordinator};
pub use types::{EngineError, NodeRow, NodeView, ParseMode, RowKind};

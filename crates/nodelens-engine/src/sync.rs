//! Edit-and-commit orchestration.
//!
//! The coordinator owns the authoritative document text, the wholesale
//! replaced node set, the path-keyed selection, and the edit-surface state
//! machine. All state changes run to completion inside a single owning
//! context; the document is only ever replaced whole, never edited in place.
//!
//! The graph-rebuild collaborator is a seam: [`GraphRebuild::rebuild`]
//! returns the fresh node set, and that return is the completion signal the
//! re-selection step waits on. No timing guess is involved - re-selection
//! only ever runs against a node set a finished rebuild handed back.

use serde_json::Value;

use nodelens_path::{is_path_equal, Path, PathStep};

use crate::mutate::mutate;
use crate::normalize::canonical_text;
use crate::types::{EngineError, NodeView, ParseMode};

/// External collaborator that regenerates the full node set from document
/// text. Called exactly once per committed document.
pub trait GraphRebuild {
    fn rebuild(&mut self, text: &str) -> Vec<NodeView>;
}

/// State of the edit surface.
///
/// `Editing` holds the raw text currently in the editor, seeded with the
/// selected node's canonical text on entry and replaced with the user's text
/// when a save fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { text: String },
}

/// Orchestrates the full edit-and-commit cycle over one document.
pub struct SyncCoordinator<R: GraphRebuild> {
    rebuilder: R,
    document: String,
    nodes: Vec<NodeView>,
    selected: Option<Path>,
    edit: EditState,
    parse_mode: ParseMode,
}

impl<R: GraphRebuild> SyncCoordinator<R> {
    /// Build a coordinator over the given document text. The rebuild
    /// collaborator runs once immediately to produce the initial node set.
    pub fn new(text: impl Into<String>, rebuilder: R) -> Self {
        let mut coordinator = SyncCoordinator {
            rebuilder,
            document: text.into(),
            nodes: Vec::new(),
            selected: None,
            edit: EditState::Viewing,
            parse_mode: ParseMode::default(),
        };
        coordinator.nodes = coordinator.rebuilder.rebuild(&coordinator.document);
        coordinator
    }

    /// Set how unparseable edited text is treated on save.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    // ── Read surface ──────────────────────────────────────────────────────

    /// The authoritative document text: always the last value accepted by a
    /// successful save or load.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// The current node set, rebuilt wholesale on every commit.
    pub fn nodes(&self) -> &[NodeView] {
        &self.nodes
    }

    /// Path-equality lookup into the node set.
    pub fn node_at(&self, path: &[PathStep]) -> Option<&NodeView> {
        self.nodes.iter().find(|n| is_path_equal(&n.path, path))
    }

    /// The selected node, if its path still matches one in the node set.
    pub fn selected(&self) -> Option<&NodeView> {
        self.node_at(self.selected.as_deref()?)
    }

    /// The selection key itself.
    pub fn selected_path(&self) -> Option<&[PathStep]> {
        self.selected.as_deref()
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Canonical text of the selected node, for the read-only display
    /// surface.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSelection`] without a selected node.
    pub fn display_text(&self) -> Result<String, EngineError> {
        let node = self.selected().ok_or(EngineError::NoSelection)?;
        canonical_text(node)
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Select the node at `path`, or clear the selection with `None`.
    ///
    /// Switching selection while editing forcibly resets the edit surface to
    /// viewing; an edit in progress is abandoned, never merged.
    pub fn select(&mut self, path: Option<Path>) {
        self.selected = path;
        self.edit = EditState::Viewing;
    }

    // ── Document replacement ──────────────────────────────────────────────

    /// Replace the document text outright (initial load or external reload),
    /// rebuild the node set, and re-resolve the selection by path equality.
    pub fn load(&mut self, text: impl Into<String>) {
        self.document = text.into();
        self.edit = EditState::Viewing;
        self.rebuild_and_reselect();
    }

    fn rebuild_and_reselect(&mut self) {
        self.nodes = self.rebuilder.rebuild(&self.document);
        if let Some(path) = &self.selected {
            if !self.nodes.iter().any(|n| is_path_equal(&n.path, path)) {
                self.selected = None;
            }
        }
    }

    // ── Edit surface ──────────────────────────────────────────────────────

    /// Enter edit mode, seeding the editor with the selected node's
    /// canonical text.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSelection`] without a selected node; serialization
    /// failures propagate from normalization.
    pub fn start_edit(&mut self) -> Result<(), EngineError> {
        let text = self.display_text()?;
        self.edit = EditState::Editing { text };
        Ok(())
    }

    /// Leave edit mode, discarding locally held edited text. Never touches
    /// the document, so it is always safe; no rollback exists or is needed.
    pub fn cancel(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Commit the edited text at the selected node's path.
    ///
    /// On success the edit surface returns to viewing, the document text is
    /// replaced atomically, the node set is rebuilt, and the selection is
    /// re-resolved by path equality (cleared when the edit removed or
    /// restructured the selected location). On failure the edit surface
    /// stays in edit mode holding `edited`, and the authoritative document
    /// is untouched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoSelection`] - no node is selected.
    /// - [`EngineError::InvalidDocument`] - the authoritative text is not
    ///   valid JSON; the edit is never attempted.
    /// - [`EngineError::InvalidEdit`] - the edited text is not valid JSON
    ///   and [`ParseMode::Strict`] is in effect. Under
    ///   [`ParseMode::Lenient`] the raw text becomes a JSON string instead.
    /// - [`EngineError::TypeMismatch`] - the path disagrees with the
    ///   document's structure.
    /// - [`EngineError::Serialization`] - the mutated tree failed to
    ///   re-serialize.
    pub fn save(&mut self, edited: &str) -> Result<(), EngineError> {
        if self.selected.is_none() {
            return Err(EngineError::NoSelection);
        }
        match self.try_save(edited) {
            Ok(()) => {
                self.edit = EditState::Viewing;
                Ok(())
            }
            Err(err) => {
                self.edit = EditState::Editing {
                    text: edited.to_string(),
                };
                Err(err)
            }
        }
    }

    fn try_save(&mut self, edited: &str) -> Result<(), EngineError> {
        let path = self.selected.clone().ok_or(EngineError::NoSelection)?;

        let doc: Value = serde_json::from_str(&self.document)
            .map_err(|e| EngineError::InvalidDocument(e.to_string()))?;

        let new_value = match serde_json::from_str::<Value>(edited) {
            Ok(value) => value,
            Err(e) => match self.parse_mode {
                ParseMode::Lenient => Value::String(edited.to_string()),
                ParseMode::Strict => return Err(EngineError::InvalidEdit(e.to_string())),
            },
        };

        let mutated = mutate(&doc, &path, new_value)?;

        let text = serde_json::to_string_pretty(&mutated)
            .map_err(|e| EngineError::Serialization(e.to_string()))?;

        // Single whole-value replacement; readers never see a partial tree.
        self.document = text;
        self.rebuild_and_reselect();
        Ok(())
    }
}

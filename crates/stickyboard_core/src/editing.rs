//! Per-note view state owned by the presentation layer.
//!
//! # Responsibility
//! - Track which notes are in text-edit mode and which one is being dragged.
//! - Derive stacking order from that state.
//!
//! # Invariants
//! - Edit mode is seeded from `Note::is_new` only the first time a note is
//!   observed.
//! - A note in edit mode cannot start a drag.
//! - The note store never sees this state.

use crate::model::note::{Note, NoteId};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Stacking level of a note in edit mode.
pub const Z_INDEX_EDITING: i32 = 1000;
/// Stacking level of the note being dragged.
pub const Z_INDEX_DRAGGING: i32 = 999;
/// Stacking level of an idle note.
pub const Z_INDEX_IDLE: i32 = 1;

/// Editing/dragging flags keyed by note id.
#[derive(Debug, Default, Clone)]
pub struct EditingState {
    seen: BTreeSet<NoteId>,
    editing: BTreeSet<NoteId>,
    dragging: Option<NoteId>,
}

impl EditingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers notes from a render pass, seeding edit mode for unseen new
    /// notes.
    pub fn observe(&mut self, notes: &[Arc<Note>]) {
        for note in notes {
            if self.seen.insert(note.id) && note.is_new {
                self.editing.insert(note.id);
            }
        }
    }

    /// Enters edit mode (double-click).
    pub fn begin_edit(&mut self, id: NoteId) {
        self.seen.insert(id);
        self.editing.insert(id);
    }

    /// Leaves edit mode (confirm button).
    pub fn confirm(&mut self, id: NoteId) {
        self.editing.remove(&id);
    }

    pub fn is_editing(&self, id: NoteId) -> bool {
        self.editing.contains(&id)
    }

    /// Marks `id` as dragged. Returns `false` and changes nothing while the
    /// note is being edited.
    pub fn begin_drag(&mut self, id: NoteId) -> bool {
        if self.is_editing(id) {
            return false;
        }
        self.dragging = Some(id);
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<NoteId> {
        self.dragging
    }

    pub fn z_index(&self, id: NoteId) -> i32 {
        if self.is_editing(id) {
            Z_INDEX_EDITING
        } else if self.dragging == Some(id) {
            Z_INDEX_DRAGGING
        } else {
            Z_INDEX_IDLE
        }
    }
}

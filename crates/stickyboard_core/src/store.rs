//! In-memory ordered note collection.
//!
//! # Responsibility
//! - Own the board's notes in insertion order.
//! - Expose the only four mutations allowed on the collection.
//!
//! # Invariants
//! - Ids are unique; `add_note` retries generation until it is.
//! - Records are shared as `Arc<Note>`. A mutation installs a new `Arc` for
//!   the touched record only, so untouched records keep pointer identity.
//! - Order is never changed by updates.

use crate::geometry::Point;
use crate::model::note::{Note, NoteId};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Note store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered collection of notes.
#[derive(Debug, Default, Clone)]
pub struct NoteStore {
    notes: Vec<Arc<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty new note at `position` and returns its fresh id.
    pub fn add_note(&mut self, position: Point) -> NoteId {
        self.add_note_with(position, Uuid::new_v4)
    }

    fn add_note_with(&mut self, position: Point, mut next_id: impl FnMut() -> NoteId) -> NoteId {
        let mut id = next_id();
        while self.contains(id) {
            warn!("event=note_id_collision module=store status=retry");
            id = next_id();
        }
        self.notes.push(Arc::new(Note::new(id, position)));
        debug!(
            "event=note_add module=store status=ok count={}",
            self.notes.len()
        );
        id
    }

    /// Replaces the text of note `id`.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent; no record is touched.
    pub fn update_text(&mut self, id: NoteId, text: impl Into<String>) -> StoreResult<()> {
        let slot = self.slot_mut(id)?;
        *slot = Arc::new(slot.with_text(text));
        Ok(())
    }

    /// Replaces the position of note `id`.
    ///
    /// # Errors
    /// - `NotFound` when `id` is absent; no record is touched.
    pub fn update_position(&mut self, id: NoteId, position: Point) -> StoreResult<()> {
        let slot = self.slot_mut(id)?;
        if slot.position != position {
            *slot = Arc::new(slot.with_position(position));
        }
        Ok(())
    }

    /// Replaces the whole collection, typically with reflow output.
    pub fn replace_all(&mut self, notes: Vec<Arc<Note>>) {
        self.notes = notes;
    }

    pub fn get(&self, id: NoteId) -> Option<&Arc<Note>> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Arc<Note>] {
        &self.notes
    }

    pub fn ids(&self) -> Vec<NoteId> {
        self.notes.iter().map(|note| note.id).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn slot_mut(&mut self, id: NoteId) -> StoreResult<&mut Arc<Note>> {
        self.notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

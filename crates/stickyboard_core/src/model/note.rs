//! Sticky-note record.
//!
//! # Responsibility
//! - Define the canonical note shape shared by the store and layout engines.
//!
//! # Invariants
//! - `id` is unique within a board and never reused.
//! - `is_new` is a one-shot creation marker; nothing re-derives it.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// One sticky note on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Freeform body; empty at creation.
    pub text: String,
    /// Top-left corner in viewport pixels.
    pub position: Point,
    /// True only for a freshly added note; seeds the initial edit mode.
    pub is_new: bool,
}

impl Note {
    /// Creates an empty, freshly added note.
    pub fn new(id: NoteId, position: Point) -> Self {
        Self {
            id,
            text: String::new(),
            position,
            is_new: true,
        }
    }

    /// Returns a copy with `position` replaced.
    pub fn with_position(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Returns a copy with `text` replaced.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

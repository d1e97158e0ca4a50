//! Board domain model.
//!
//! # Responsibility
//! - Define the sticky-note record rendered by the presentation layer.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Notes are never deleted; the collection only grows.

pub mod note;

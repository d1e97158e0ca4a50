//! Top-level board controller.
//!
//! # Responsibility
//! - Translate UI events (add, drag end, resize, text edit) into layout
//!   computations and store mutations.
//! - Own the note store exclusively; no other component mutates it.
//!
//! # Invariants
//! - Placement, reflow and drag resolution share one validated
//!   `LayoutConfig`.
//! - Reflow runs only when the viewport dimensions actually change.
//! - The obstacle is derived from the current viewport on every call.

use crate::config::{validate_viewport, LayoutConfig, LayoutConfigError};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{place_new_note, reflow, resolve_drag, LayoutFrame};
use crate::model::note::{Note, NoteId};
use crate::store::{NoteStore, StoreError, StoreResult};
use crate::viewport::ViewportSource;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Sticky-note board driven by host UI events.
pub struct Board<R: Rng = StdRng> {
    config: LayoutConfig,
    viewport: Size,
    store: NoteStore,
    rng: R,
}

impl Board<StdRng> {
    /// Creates an empty board with an entropy-seeded RNG.
    ///
    /// # Errors
    /// - Returns the validation error for an unusable `config` or `viewport`.
    pub fn new(config: LayoutConfig, viewport: Size) -> Result<Self, LayoutConfigError> {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> Board<R> {
    /// Creates an empty board using `rng` for note placement.
    ///
    /// # Errors
    /// - Returns the validation error for an unusable `config` or `viewport`.
    pub fn with_rng(
        config: LayoutConfig,
        viewport: Size,
        rng: R,
    ) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        validate_viewport(viewport)?;
        info!(
            "event=board_init module=board status=ok viewport={}x{}",
            viewport.width, viewport.height
        );
        Ok(Self {
            config,
            viewport,
            store: NoteStore::new(),
            rng,
        })
    }

    /// Handles the add control: places a new empty note and returns its id.
    pub fn add_note(&mut self) -> NoteId {
        let frame = self.frame();
        let position = place_new_note(&frame, self.config.max_placement_attempts, &mut self.rng);
        self.store.add_note(position)
    }

    /// Handles a drag end for note `id` moved by `delta`.
    ///
    /// Returns the resolved resting position. Only the dragged note changes.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not on the board.
    pub fn drag_end(&mut self, id: NoteId, delta: Point) -> StoreResult<Point> {
        let frame = self.frame();
        let note = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        let position = resolve_drag(note, delta, &frame);
        self.store.update_position(id, position)?;
        Ok(position)
    }

    /// Handles a viewport change. Returns the number of notes moved.
    ///
    /// Equal dimensions are ignored, so high-frequency resize streams are
    /// cheap to forward without debouncing. Non-finite or empty sizes are
    /// dropped and the previous viewport stays active.
    pub fn resize(&mut self, viewport: Size) -> usize {
        if viewport == self.viewport {
            return 0;
        }
        if let Err(err) = validate_viewport(viewport) {
            warn!("event=viewport_change module=board status=rejected reason=\"{err}\"");
            return 0;
        }
        debug!(
            "event=viewport_change module=board from={}x{} to={}x{}",
            self.viewport.width, self.viewport.height, viewport.width, viewport.height
        );
        self.viewport = viewport;

        let outcome = reflow(self.store.notes(), &self.frame());
        if outcome.moved > 0 {
            self.store.replace_all(outcome.notes);
        }
        outcome.moved
    }

    /// Pulls the current size from `source` and reflows when it changed.
    pub fn sync_viewport(&mut self, source: &impl ViewportSource) -> usize {
        self.resize(source.viewport())
    }

    /// Replaces the text of note `id` (one call per keystroke).
    ///
    /// # Errors
    /// - `NotFound` when `id` is not on the board.
    pub fn edit_text(&mut self, id: NoteId, text: impl Into<String>) -> StoreResult<()> {
        self.store.update_text(id, text)
    }

    /// Notes in insertion (render) order.
    pub fn notes(&self) -> &[Arc<Note>] {
        self.store.notes()
    }

    pub fn note(&self, id: NoteId) -> Option<&Arc<Note>> {
        self.store.get(id)
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Add-control rectangle for the current viewport.
    pub fn obstacle(&self) -> Rect {
        self.frame().obstacle
    }

    fn frame(&self) -> LayoutFrame {
        LayoutFrame::new(&self.config, self.viewport)
    }
}

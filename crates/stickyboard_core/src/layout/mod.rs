//! Layout engines that keep notes inside the viewport and off the add control.
//!
//! # Responsibility
//! - Place new notes (`placement`).
//! - Re-apply constraints after a viewport change (`reflow`).
//! - Resolve a finished drag (`drag`).
//!
//! # Invariants
//! - Engines are pure: they read a `LayoutFrame` and return positions or
//!   records, never mutating the store.
//! - A written position lies within `[padding, viewport - note - padding]`
//!   and clear of the obstacle, unless no such position exists and the
//!   viewport bound wins.

pub mod drag;
pub mod placement;
pub mod reflow;

use crate::config::LayoutConfig;
use crate::geometry::{clamp_to_viewport, rects_overlap, Point, Rect, Size};

/// Geometry snapshot for one layout computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutFrame {
    pub viewport: Size,
    pub obstacle: Rect,
    pub note: Size,
    pub padding: f64,
}

impl LayoutFrame {
    /// Derives a frame for `viewport`, centering the add control fresh.
    pub fn new(config: &LayoutConfig, viewport: Size) -> Self {
        Self {
            viewport,
            obstacle: Rect::centered_in(viewport, config.obstacle),
            note: config.note,
            padding: config.padding,
        }
    }

    pub fn clamp(&self, position: Point) -> Point {
        clamp_to_viewport(position, self.note, self.viewport, self.padding)
    }

    pub fn note_rect(&self, position: Point) -> Rect {
        Rect::from_origin_size(position, self.note)
    }

    pub fn hits_obstacle(&self, position: Point) -> bool {
        rects_overlap(&self.note_rect(position), &self.obstacle)
    }

    /// Origin that parks a note right above the obstacle (before clamping).
    fn above_obstacle_y(&self) -> f64 {
        self.obstacle.top - self.note.height - self.padding
    }

    /// Origin that parks a note right below the obstacle (before clamping).
    fn below_obstacle_y(&self) -> f64 {
        self.obstacle.bottom + self.padding
    }
}

pub use drag::resolve_drag;
pub use placement::place_new_note;
pub use reflow::{reflow, ReflowOutcome};

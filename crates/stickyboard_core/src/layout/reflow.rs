//! Viewport-change reflow of existing notes.

use super::LayoutFrame;
use crate::geometry::Point;
use crate::model::note::Note;
use log::debug;
use std::sync::Arc;

/// Reflow result for a whole collection.
#[derive(Debug, Clone)]
pub struct ReflowOutcome {
    /// Notes in input order. Unmoved notes are the input `Arc`s themselves.
    pub notes: Vec<Arc<Note>>,
    /// Number of notes that received a new position.
    pub moved: usize,
}

/// Re-applies viewport and obstacle constraints to every note for `frame`.
///
/// Each note is clamped into the new viewport. A clamped note that still hits
/// the obstacle is moved vertically: below the obstacle when its center sits
/// above the viewport midline, above it otherwise, then clamped again. X is
/// never changed by the obstacle correction.
///
/// Running it twice for the same frame moves nothing the second time.
pub fn reflow(notes: &[Arc<Note>], frame: &LayoutFrame) -> ReflowOutcome {
    let mut moved = 0;
    let notes = notes
        .iter()
        .map(|note| {
            let position = reflow_position(note.position, frame);
            if position == note.position {
                Arc::clone(note)
            } else {
                moved += 1;
                Arc::new(note.with_position(position))
            }
        })
        .collect();

    debug!(
        "event=notes_reflow module=reflow status=ok moved={moved} viewport={}x{}",
        frame.viewport.width, frame.viewport.height
    );
    ReflowOutcome { notes, moved }
}

fn reflow_position(position: Point, frame: &LayoutFrame) -> Point {
    let clamped = frame.clamp(position);
    if !frame.hits_obstacle(clamped) {
        return clamped;
    }

    let center_y = clamped.y + frame.note.height / 2.0;
    let y = if center_y < frame.viewport.height / 2.0 {
        frame.below_obstacle_y()
    } else {
        frame.above_obstacle_y()
    };
    frame.clamp(Point::new(clamped.x, y))
}

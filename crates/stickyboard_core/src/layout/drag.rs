//! Drag-end resolution for a single note.

use super::LayoutFrame;
use crate::geometry::Point;
use crate::model::note::Note;
use log::debug;

/// Computes where a note dropped after moving by `delta` comes to rest.
///
/// The tentative origin is clamped into the viewport. If it then hits the
/// obstacle, the note is parked above the obstacle, horizontally centered on
/// it, and clamped again. Unlike reflow this always picks "above".
pub fn resolve_drag(note: &Note, delta: Point, frame: &LayoutFrame) -> Point {
    let clamped = frame.clamp(note.position.offset(delta));
    if !frame.hits_obstacle(clamped) {
        return clamped;
    }

    let x = frame.obstacle.left + frame.obstacle.width() / 2.0 - frame.note.width / 2.0;
    let resolved = frame.clamp(Point::new(x, frame.above_obstacle_y()));
    debug!(
        "event=drag_resolve module=drag status=obstacle_override x={} y={}",
        resolved.x, resolved.y
    );
    resolved
}

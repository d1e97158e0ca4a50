//! Axis-aligned geometry shared by every layout engine.
//!
//! # Responsibility
//! - Define pixel-space value types (`Point`, `Size`, `Rect`).
//! - Provide the overlap test and viewport clamp used by placement, reflow
//!   and drag resolution.
//!
//! # Invariants
//! - All coordinates are `f64` viewport pixels with the origin top-left.
//! - Overlap uses exclusive boundaries: rectangles that only share an edge
//!   do not overlap.
//! - Clamping applies the upper bound first, so the lower bound wins when the
//!   viewport is too small for the note plus padding.

use serde::{Deserialize, Serialize};

/// Top-left anchored position or displacement in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by `delta`.
    pub fn offset(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Width/height pair in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle stored by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds the rectangle occupied by an item of `size` anchored at `origin`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Builds a rectangle of `size` centered inside `viewport`.
    ///
    /// Used to derive the add-control obstacle from the current viewport; the
    /// result is never cached.
    pub fn centered_in(viewport: Size, size: Size) -> Self {
        let left = viewport.width / 2.0 - size.width / 2.0;
        let top = viewport.height / 2.0 - size.height / 2.0;
        Self::new(left, top, left + size.width, top + size.height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Returns whether `a` and `b` overlap.
///
/// Separating-axis test with exclusive edges: touching rectangles are
/// reported as disjoint.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    let separated =
        a.right <= b.left || a.left >= b.right || a.bottom <= b.top || a.top >= b.bottom;
    !separated
}

/// Clamps a note origin into `[padding, viewport - note - padding]` per axis.
///
/// When the viewport is smaller than `note + 2 * padding` the range collapses
/// and the result is `padding`, even if the note then spills past the far
/// edge.
pub fn clamp_to_viewport(position: Point, note: Size, viewport: Size, padding: f64) -> Point {
    Point::new(
        clamp_axis(position.x, padding, viewport.width - note.width - padding),
        clamp_axis(position.y, padding, viewport.height - note.height - padding),
    )
}

// Not `f64::clamp`: that panics when `max < min`.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::{clamp_to_viewport, rects_overlap, Point, Rect, Size};

    #[test]
    fn centered_in_matches_add_control_bounds() {
        let obstacle = Rect::centered_in(Size::new(1000.0, 800.0), Size::new(250.0, 50.0));
        assert_eq!(obstacle, Rect::new(375.0, 375.0, 625.0, 425.0));
        assert_eq!(obstacle.width(), 250.0);
        assert_eq!(obstacle.height(), 50.0);
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn corner_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn clamp_collapses_to_padding_for_tiny_viewport() {
        let clamped = clamp_to_viewport(
            Point::new(400.0, 400.0),
            Size::new(250.0, 180.0),
            Size::new(200.0, 200.0),
            50.0,
        );
        assert_eq!(clamped, Point::new(50.0, 50.0));
    }
}

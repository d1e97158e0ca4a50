//! Rejection-sampling placement for new notes.

use super::LayoutFrame;
use crate::geometry::Point;
use log::{debug, warn};
use rand::Rng;

/// Picks an origin for a new note that avoids the obstacle.
///
/// Draws up to `max_attempts` uniform candidates inside the padded viewport
/// and returns the first one clear of the obstacle. On exhaustion it falls
/// back to the spot directly above the obstacle (left-aligned), or below it
/// when above would cross the top padding, then clamps into the viewport.
/// The fallback is not re-checked against the obstacle after clamping.
pub fn place_new_note<R: Rng>(
    frame: &LayoutFrame,
    max_attempts: u32,
    rng: &mut R,
) -> Point {
    let max_x = frame.viewport.width - frame.note.width - frame.padding;
    let max_y = frame.viewport.height - frame.note.height - frame.padding;

    for attempt in 1..=max_attempts {
        let candidate = Point::new(
            sample_axis(rng, frame.padding, max_x),
            sample_axis(rng, frame.padding, max_y),
        );
        if !frame.hits_obstacle(candidate) {
            debug!("event=note_place module=placement status=ok attempts={attempt}");
            return candidate;
        }
    }

    let position = fallback_position(frame);
    warn!(
        "event=note_place module=placement status=fallback attempts={} x={} y={}",
        max_attempts, position.x, position.y
    );
    position
}

fn fallback_position(frame: &LayoutFrame) -> Point {
    let mut y = frame.above_obstacle_y();
    if y < frame.padding {
        y = frame.below_obstacle_y();
    }
    frame.clamp(Point::new(frame.obstacle.left, y))
}

// A collapsed, inverted or non-finite range pins the axis to its lower bound,
// matching the clamp rule for undersized viewports.
fn sample_axis<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min.is_finite() && max.is_finite() && max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::{fallback_position, place_new_note};
    use crate::config::LayoutConfig;
    use crate::geometry::{Point, Size};
    use crate::layout::LayoutFrame;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_attempts_goes_straight_to_above_fallback() {
        let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(1000.0, 800.0));
        let mut rng = StdRng::seed_from_u64(7);

        let position = place_new_note(&frame, 0, &mut rng);
        assert_eq!(position, Point::new(375.0, 145.0));
        assert!(!frame.hits_obstacle(position));
    }

    #[test]
    fn non_finite_viewport_pins_axis_instead_of_panicking() {
        let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(f64::INFINITY, 800.0));
        let mut rng = StdRng::seed_from_u64(3);

        let position = place_new_note(&frame, 100, &mut rng);
        assert_eq!(position.x, 50.0);
        assert!((50.0..=570.0).contains(&position.y));
    }

    #[test]
    fn fallback_switches_below_when_above_crosses_top_padding() {
        // Obstacle spans y 275..325, so above would be 275 - 180 - 50 = 45.
        // Below is 375, clamped to the bottom bound 600 - 180 - 50 = 370.
        let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(1000.0, 600.0));
        assert_eq!(fallback_position(&frame), Point::new(375.0, 370.0));
    }
}

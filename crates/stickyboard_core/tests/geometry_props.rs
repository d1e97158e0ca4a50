use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stickyboard_core::{clamp_to_viewport, rects_overlap, Point, Rect, Size};

fn random_rect(rng: &mut StdRng) -> Rect {
    let left = rng.gen_range(0.0..500.0_f64).round();
    let top = rng.gen_range(0.0..500.0_f64).round();
    let width = rng.gen_range(1.0..200.0_f64).round();
    let height = rng.gen_range(1.0..200.0_f64).round();
    Rect::new(left, top, left + width, top + height)
}

#[test]
fn overlap_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a), "{a:?} vs {b:?}");
    }
}

#[test]
fn shared_edges_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let right_neighbour = Rect::new(100.0, 0.0, 200.0, 100.0);
    let below_neighbour = Rect::new(0.0, 100.0, 100.0, 200.0);

    assert!(!rects_overlap(&a, &right_neighbour));
    assert!(!rects_overlap(&right_neighbour, &a));
    assert!(!rects_overlap(&a, &below_neighbour));
    assert!(rects_overlap(&a, &Rect::new(99.5, 0.0, 200.0, 100.0)));
}

#[test]
fn clamp_is_idempotent() {
    let note = Size::new(250.0, 180.0);
    let viewports = [Size::new(1000.0, 800.0), Size::new(300.0, 200.0)];
    let mut rng = StdRng::seed_from_u64(9);

    for viewport in viewports {
        for _ in 0..200 {
            let raw = Point::new(
                rng.gen_range(-500.0..1500.0),
                rng.gen_range(-500.0..1500.0),
            );
            let once = clamp_to_viewport(raw, note, viewport, 50.0);
            let twice = clamp_to_viewport(once, note, viewport, 50.0);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn clamp_keeps_in_range_positions() {
    let position = Point::new(120.0, 333.0);
    let clamped = clamp_to_viewport(
        position,
        Size::new(250.0, 180.0),
        Size::new(1000.0, 800.0),
        50.0,
    );
    assert_eq!(clamped, position);
}

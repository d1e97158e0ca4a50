use std::sync::Arc;
use stickyboard_core::{reflow, LayoutConfig, LayoutFrame, Note, Point, Size};
use uuid::Uuid;

fn note_at(x: f64, y: f64) -> Arc<Note> {
    Arc::new(Note::new(Uuid::new_v4(), Point::new(x, y)))
}

#[test]
fn unchanged_notes_keep_identity_and_moved_notes_are_new() {
    let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(1000.0, 800.0));
    let stays = note_at(100.0, 100.0);
    let shifts = note_at(850.0, 600.0);
    let input = vec![Arc::clone(&stays), Arc::clone(&shifts)];

    let outcome = reflow(&input, &frame);

    assert_eq!(outcome.moved, 1);
    assert!(Arc::ptr_eq(&outcome.notes[0], &stays));
    assert!(!Arc::ptr_eq(&outcome.notes[1], &shifts));
    assert_eq!(outcome.notes[1].position, Point::new(700.0, 570.0));
    assert_eq!(outcome.notes[1].id, shifts.id);
    assert_eq!(shifts.position, Point::new(850.0, 600.0));
}

#[test]
fn obstacle_overlap_moves_only_vertically() {
    let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(1000.0, 800.0));
    let upper = note_at(400.0, 300.0);
    let lower = note_at(420.0, 350.0);

    let outcome = reflow(&[upper, lower], &frame);

    assert_eq!(outcome.notes[0].position, Point::new(400.0, 475.0));
    assert_eq!(outcome.notes[1].position, Point::new(420.0, 145.0));
    assert!(outcome.notes.iter().all(|note| !frame.hits_obstacle(note.position)));
}

#[test]
fn second_pass_is_a_no_op() {
    let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(900.0, 700.0));
    let notes = vec![
        note_at(10.0, 10.0),
        note_at(400.0, 300.0),
        note_at(2000.0, 2000.0),
    ];

    let first = reflow(&notes, &frame);
    let second = reflow(&first.notes, &frame);

    assert_eq!(second.moved, 0);
    for (before, after) in first.notes.iter().zip(&second.notes) {
        assert!(Arc::ptr_eq(before, after));
    }
}

#[test]
fn order_and_text_survive_reflow() {
    let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(600.0, 600.0));
    let notes: Vec<Arc<Note>> = (0..3)
        .map(|i| Arc::new(note_at(900.0, 900.0).with_text(format!("note {i}"))))
        .collect();

    let outcome = reflow(&notes, &frame);

    let ids: Vec<_> = outcome.notes.iter().map(|note| note.id).collect();
    let expected: Vec<_> = notes.iter().map(|note| note.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(outcome.notes[2].text, "note 2");
}

#[test]
fn displaced_note_is_reclamped_without_obstacle_recheck() {
    // Obstacle spans y 175..225; bottom bound is 400 - 180 - 50 = 170.
    let frame = LayoutFrame::new(&LayoutConfig::default(), Size::new(1000.0, 400.0));
    let note = note_at(400.0, 100.0);

    let outcome = reflow(&[note], &frame);

    // Center 190 is above the 200 midline, so below (275) is chosen and clamped.
    assert_eq!(outcome.moved, 1);
    assert_eq!(outcome.notes[0].position, Point::new(400.0, 170.0));
    assert!(frame.hits_obstacle(outcome.notes[0].position));
}

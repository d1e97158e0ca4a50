//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `stickyboard_core` linkage.
//! - Start core file logging at the build-mode default level.
//! - Replay a short board session (add, drag, resize) and print positions.

use stickyboard_core::{
    default_log_level, init_logging, Board, EditingState, FixedViewport, LayoutConfig, Point, Size,
};

fn main() {
    println!("stickyboard_core ping={}", stickyboard_core::ping());
    println!("stickyboard_core version={}", stickyboard_core::core_version());

    let log_dir = std::env::temp_dir().join("stickyboard-cli-logs");
    match init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        Ok(()) => println!("logging level={} dir={}", default_log_level(), log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let mut board = match Board::new(LayoutConfig::default(), Size::new(1000.0, 800.0)) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("board init failed: {err}");
            std::process::exit(1);
        }
    };
    let mut editing = EditingState::new();

    let ids: Vec<_> = (0..3).map(|_| board.add_note()).collect();
    editing.observe(board.notes());
    print_board("add", &board, &editing);

    for id in &ids {
        editing.confirm(*id);
    }
    // Drop the first note onto the add control.
    let first = ids[0];
    let Some(origin) = board.note(first).map(|note| note.position) else {
        return;
    };
    let obstacle = board.obstacle();
    let delta = Point::new(obstacle.left - origin.x, obstacle.top - origin.y);
    if let Err(err) = board.drag_end(first, delta) {
        eprintln!("drag failed: {err}");
    }
    print_board("drag", &board, &editing);

    let moved = board.sync_viewport(&FixedViewport(Size::new(640.0, 480.0)));
    println!("resize moved={moved}");
    print_board("resize", &board, &editing);
}

fn print_board(step: &str, board: &Board, editing: &EditingState) {
    for note in board.notes() {
        println!(
            "{step} id={} x={:.1} y={:.1} z={}",
            note.id,
            note.position.x,
            note.position.y,
            editing.z_index(note.id)
        );
    }
}

//! Core layout logic for the sticky-note board.
//! This crate is the single source of truth for note placement invariants.

pub mod board;
pub mod config;
pub mod editing;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod model;
pub mod store;
pub mod viewport;

pub use board::Board;
pub use config::{LayoutConfig, LayoutConfigError};
pub use editing::EditingState;
pub use geometry::{clamp_to_viewport, rects_overlap, Point, Rect, Size};
pub use layout::{place_new_note, reflow, resolve_drag, LayoutFrame, ReflowOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use store::{NoteStore, StoreError, StoreResult};
pub use viewport::{FixedViewport, ViewportSource};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Layout configuration shared by placement, reflow and drag resolution.
//!
//! # Responsibility
//! - Hold the fixed note, add-control and padding dimensions.
//! - Parse optional JSON overrides and reject unusable values.
//!
//! # Invariants
//! - One `LayoutConfig` instance feeds every layout engine of a board, so the
//!   constants can never diverge between components.
//! - A validated config has finite, positive note/obstacle sizes and finite,
//!   non-negative padding.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_NOTE_WIDTH: f64 = 250.0;
pub const DEFAULT_NOTE_HEIGHT: f64 = 180.0;
pub const DEFAULT_PADDING: f64 = 50.0;
pub const DEFAULT_ADD_BUTTON_WIDTH: f64 = 250.0;
pub const DEFAULT_ADD_BUTTON_HEIGHT: f64 = 50.0;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Configuration validation/parse errors.
#[derive(Debug)]
pub enum LayoutConfigError {
    InvalidDimension { field: &'static str, value: f64 },
    InvalidPadding(f64),
    Parse(serde_json::Error),
}

impl Display for LayoutConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "{field} must be finite and > 0, got {value}")
            }
            Self::InvalidPadding(value) => {
                write!(f, "padding must be finite and >= 0, got {value}")
            }
            Self::Parse(err) => write!(f, "invalid layout config json: {err}"),
        }
    }
}

impl Error for LayoutConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LayoutConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Fixed geometry used by every layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Size of every sticky note.
    pub note: Size,
    /// Size of the centered add-note control.
    pub obstacle: Size,
    /// Minimum gap between a note and the viewport edge.
    pub padding: f64,
    /// Random samples tried before the deterministic fallback. `0` skips
    /// sampling entirely.
    pub max_placement_attempts: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            note: Size::new(DEFAULT_NOTE_WIDTH, DEFAULT_NOTE_HEIGHT),
            obstacle: Size::new(DEFAULT_ADD_BUTTON_WIDTH, DEFAULT_ADD_BUTTON_HEIGHT),
            padding: DEFAULT_PADDING,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl LayoutConfig {
    /// Parses a JSON override document; omitted fields keep their defaults.
    ///
    /// # Errors
    /// - Returns `Parse` for malformed JSON or mistyped fields.
    /// - Returns the first validation failure otherwise.
    pub fn from_json_str(raw: &str) -> Result<Self, LayoutConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every dimension can be used by the layout engines.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        check_dimension("note.width", self.note.width)?;
        check_dimension("note.height", self.note.height)?;
        check_dimension("obstacle.width", self.obstacle.width)?;
        check_dimension("obstacle.height", self.obstacle.height)?;
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LayoutConfigError::InvalidPadding(self.padding));
        }
        Ok(())
    }
}

/// Checks that a host-reported viewport can be laid out.
///
/// # Errors
/// - `InvalidDimension` when either side is non-finite or not positive.
pub fn validate_viewport(viewport: Size) -> Result<(), LayoutConfigError> {
    check_dimension("viewport.width", viewport.width)?;
    check_dimension("viewport.height", viewport.height)
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), LayoutConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutConfigError::InvalidDimension { field, value })
    }
}

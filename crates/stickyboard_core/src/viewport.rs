//! Injected viewport-size source.
//!
//! Hosts implement `ViewportSource` over their window system so the board
//! never reads global window state.

use crate::geometry::Size;

/// Supplies the current viewport dimensions.
pub trait ViewportSource {
    fn viewport(&self) -> Size;
}

/// Viewport source with fixed dimensions, for hosts without resize events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Size);

impl ViewportSource for FixedViewport {
    fn viewport(&self) -> Size {
        self.0
    }
}

impl<F> ViewportSource for F
where
    F: Fn() -> Size,
{
    fn viewport(&self) -> Size {
        self()
    }
}

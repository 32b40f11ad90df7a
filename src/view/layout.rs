//! Responsive Layout Input
//!
//! Converts viewport width samples into an explicit layout mode. The view
//! controller consumes the mode as a plain input and never reads the
//! environment itself.

/// Default viewport width below which the sidebar collapses
pub const SIDEBAR_BREAKPOINT_PX: u32 = 1024;

/// Layout mode derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Below the breakpoint; the sidebar overlays content and auto-closes
    Narrow,
    /// At or above the breakpoint; the sidebar is always visible
    Wide,
}

impl LayoutMode {
    /// Classify a width sample against the default breakpoint
    pub fn from_width(width_px: u32) -> Self {
        LayoutObserver::default().observe(width_px)
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, LayoutMode::Narrow)
    }
}

/// Maps viewport width samples to a [`LayoutMode`].
///
/// The embedding shell feeds resize events through `observe` and pushes the
/// result into the view controller.
#[derive(Debug, Clone, Copy)]
pub struct LayoutObserver {
    breakpoint_px: u32,
}

impl LayoutObserver {
    /// Create an observer with a custom breakpoint
    pub fn new(breakpoint_px: u32) -> Self {
        Self { breakpoint_px }
    }

    /// Classify one width sample
    pub fn observe(&self, width_px: u32) -> LayoutMode {
        if width_px < self.breakpoint_px {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

impl Default for LayoutObserver {
    fn default() -> Self {
        Self::new(SIDEBAR_BREAKPOINT_PX)
    }
}

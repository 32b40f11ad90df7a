//! View Controller
//!
//! Single source of truth for which screen is shown and whether the sidebar
//! is visible. A pure state machine over explicit inputs: navigation
//! requests, sidebar toggles, and layout mode samples. No I/O, no failure
//! paths.

use crate::view::layout::LayoutMode;
use crate::view::nav::{NavigationRequest, ViewId, ViewIntent, NAV_ITEMS};

/// Owns the active view and transient sidebar state
#[derive(Debug, Clone)]
pub struct ViewController {
    active: ViewId,
    sidebar_open: bool,
    layout: LayoutMode,
}

impl ViewController {
    /// Create a controller showing the dashboard
    pub fn new(layout: LayoutMode) -> Self {
        Self {
            active: ViewId::Dashboard,
            sidebar_open: false,
            layout,
        }
    }

    /// The currently active view
    pub fn active_view(&self) -> ViewId {
        self.active
    }

    /// Switch to a view unconditionally.
    ///
    /// On narrow layouts a successful selection also closes the sidebar.
    /// Reselecting the active view is a no-op transition.
    pub fn select_view(&mut self, view: ViewId) {
        if self.active != view {
            tracing::debug!(from = self.active.slug(), to = view.slug(), "view change");
        }
        self.active = view;

        if self.layout.is_narrow() {
            self.sidebar_open = false;
        }
    }

    /// Route a deep-link style request from a child view or quick action.
    ///
    /// Returns the intent for the newly active screen to consume; the
    /// controller itself treats it as opaque.
    pub fn handle_request(&mut self, request: NavigationRequest) -> Option<ViewIntent> {
        self.select_view(request.view);
        request.intent
    }

    /// Set the sidebar open flag directly; independent of the active view
    pub fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Flip the sidebar open flag
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Whether the sidebar should currently render.
    ///
    /// Wide layouts always show it; narrow layouts follow the open flag.
    pub fn sidebar_visible(&self) -> bool {
        !self.layout.is_narrow() || self.sidebar_open
    }

    /// Feed in a new layout mode from the responsive observer
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Title of the active screen.
    ///
    /// Falls back to the dashboard label; unreachable in practice since
    /// every view has a nav entry.
    pub fn current_title(&self) -> &'static str {
        NAV_ITEMS
            .iter()
            .find(|item| item.id == self.active)
            .map(|item| item.label)
            .unwrap_or(NAV_ITEMS[0].label)
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(LayoutMode::Wide)
    }
}

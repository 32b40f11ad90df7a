//! View Orchestration
//!
//! Navigation state for the dashboard shell: which screen is active, sidebar
//! visibility, and routing of deep-link style requests. List and detail
//! screens themselves are external collaborators; this module only owns the
//! selection state they hang off of.

mod controller;
mod layout;
mod nav;

pub use controller::ViewController;
pub use layout::{LayoutMode, LayoutObserver, SIDEBAR_BREAKPOINT_PX};
pub use nav::{NavItem, NavigationRequest, ViewId, ViewIntent, NAV_ITEMS};

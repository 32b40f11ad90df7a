//! Quick Actions
//!
//! The dashboard's fixed navigation shortcuts. Pure wiring: each action is a
//! [`NavigationRequest`] the view controller routes; none of them touch the
//! aggregation logic.

use crate::view::{NavigationRequest, ViewId};

/// A dashboard shortcut card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    /// Symbolic icon name; rendering is the embedding UI's concern
    pub icon: &'static str,
    pub request: NavigationRequest,
}

/// The fixed quick-action list shown on the dashboard
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        id: "register-patient",
        label: "Register Patient",
        icon: "user-plus",
        request: NavigationRequest::create(ViewId::Patients),
    },
    QuickAction {
        id: "add-doctor",
        label: "Add Doctor",
        icon: "stethoscope",
        request: NavigationRequest::create(ViewId::Doctors),
    },
    QuickAction {
        id: "schedule-appointment",
        label: "Schedule Appointment",
        icon: "calendar-plus",
        request: NavigationRequest::create(ViewId::Appointments),
    },
    QuickAction {
        id: "find-patient",
        label: "Find Patient",
        icon: "search",
        request: NavigationRequest::search(ViewId::Patients),
    },
];

//! Navigation Model
//!
//! The closed set of top-level screens and the static navigation table.

/// Top-level screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Dashboard,
    Voice,
    Patients,
    Doctors,
    Appointments,
}

impl ViewId {
    /// All views, in sidebar order
    pub const ALL: [ViewId; 5] = [
        ViewId::Dashboard,
        ViewId::Voice,
        ViewId::Patients,
        ViewId::Doctors,
        ViewId::Appointments,
    ];

    /// Parse an external identifier (deep links, saved state).
    ///
    /// Unknown identifiers fail closed to the dashboard.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "dashboard" => ViewId::Dashboard,
            "voice" => ViewId::Voice,
            "patients" => ViewId::Patients,
            "doctors" => ViewId::Doctors,
            "appointments" => ViewId::Appointments,
            _ => ViewId::Dashboard,
        }
    }

    /// Stable identifier for serialization and deep links
    pub fn slug(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Voice => "voice",
            ViewId::Patients => "patients",
            ViewId::Doctors => "doctors",
            ViewId::Appointments => "appointments",
        }
    }
}

/// Static descriptor for one sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: ViewId,
    pub label: &'static str,
    /// Symbolic icon name; rendering is the embedding UI's concern
    pub icon: &'static str,
}

/// The sidebar navigation table, defined once at startup
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: ViewId::Dashboard,
        label: "Dashboard",
        icon: "activity",
    },
    NavItem {
        id: ViewId::Voice,
        label: "Voice Assistant",
        icon: "mic",
    },
    NavItem {
        id: ViewId::Patients,
        label: "Patients",
        icon: "users",
    },
    NavItem {
        id: ViewId::Doctors,
        label: "Doctors",
        icon: "stethoscope",
    },
    NavItem {
        id: ViewId::Appointments,
        label: "Appointments",
        icon: "calendar",
    },
];

/// Intent carried alongside a navigation request, consumed by the target
/// screen (an external collaborator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIntent {
    /// Open the target screen's creation flow
    Create,
    /// Open the target screen's search flow
    Search,
}

/// A routed navigation request: which screen, and optionally what the screen
/// should do once active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    pub view: ViewId,
    pub intent: Option<ViewIntent>,
}

impl NavigationRequest {
    /// Plain screen switch
    pub const fn open(view: ViewId) -> Self {
        Self { view, intent: None }
    }

    /// Switch and start the target's creation flow
    pub const fn create(view: ViewId) -> Self {
        Self {
            view,
            intent: Some(ViewIntent::Create),
        }
    }

    /// Switch and start the target's search flow
    pub const fn search(view: ViewId) -> Self {
        Self {
            view,
            intent: Some(ViewIntent::Search),
        }
    }
}

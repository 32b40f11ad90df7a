//! # Medidesk
//!
//! Practice dashboard core - the headless heart of a medical-practice
//! management dashboard: view orchestration, concurrent statistics
//! aggregation, and guarded admin commands against a GP booking backend.
//!
//! ## Features
//!
//! - **View orchestration**: a pure state machine over the active screen,
//!   sidebar visibility, and injected layout mode
//! - **Atomic aggregation**: three statistics sources fetched concurrently
//!   and merged all-or-nothing into one snapshot
//! - **Guarded admin commands**: sample-data seeding and a confirm-gated
//!   destructive database clear, each with its own in-flight guard
//! - **Event channel**: fetch state transitions and transient notices for
//!   embedding shells
//!
//! ## Modules
//!
//! - [`view`]: navigation state machine and responsive layout input
//! - [`dashboard`]: statistics aggregator, quick actions, events
//! - [`api`]: booking backend client and wire types
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medidesk::api::BackendClient;
//! use medidesk::config::Config;
//! use medidesk::dashboard::DashboardAggregator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let client = Arc::new(BackendClient::new(config.backend.clone()));
//!     let dashboard = DashboardAggregator::new(client);
//!
//!     let state = dashboard.refresh().await;
//!     if let Some(snapshot) = state.snapshot() {
//!         println!("{} patients on file", snapshot.patients.total_patients);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod view;

// Re-export top-level types for convenience
pub use api::{
    AdminOutcome, AppointmentStatistics, BackendApi, BackendClient, BackendError,
    DoctorStatistics, HealthResponse, PatientStatistics,
};

pub use view::{
    LayoutMode, LayoutObserver, NavItem, NavigationRequest, ViewController, ViewId, ViewIntent,
    NAV_ITEMS, SIDEBAR_BREAKPOINT_PX,
};

pub use dashboard::{
    AdminError, ClearStage, DashboardAggregator, DashboardEvent, FetchState, Notice, NoticeLevel,
    QuickAction, StatisticsSnapshot, QUICK_ACTIONS,
};

pub use config::{Config, ConfigError, LoggingConfig};

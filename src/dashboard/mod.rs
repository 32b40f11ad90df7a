//! Dashboard Aggregation
//!
//! The dashboard's data side: concurrent statistics aggregation into an
//! atomically-replaced snapshot, admin commands with per-command in-flight
//! guards, quick-action wiring, and an event channel for embedding shells.

mod actions;
mod aggregator;
mod messages;
mod snapshot;

pub use actions::{QuickAction, QUICK_ACTIONS};
pub use aggregator::{AdminError, ClearStage, DashboardAggregator};
pub use messages::{DashboardEvent, Notice, NoticeLevel};
pub use snapshot::{FetchState, StatisticsSnapshot};

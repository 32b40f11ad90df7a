//! Dashboard Events
//!
//! Broadcast payloads the aggregator publishes for embedding shells: fetch
//! state transitions and transient notices from admin commands.

use chrono::{DateTime, Utc};

use crate::dashboard::snapshot::FetchState;

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient, user-visible message.
///
/// Notices accompany admin command outcomes; they never alter the fetch
/// state and carry their own timestamp for toast ordering.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Events published on the aggregator's broadcast channel
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The authoritative fetch state changed
    FetchStateChanged(FetchState),
    /// A transient notice for the notification area
    Notice(Notice),
}

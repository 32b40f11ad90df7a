//! Statistics Snapshot
//!
//! The atomically-replaced aggregate of the three statistics payloads and
//! the authoritative fetch state surrounding it.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::api::{AppointmentStatistics, DoctorStatistics, PatientStatistics};

/// One coherent aggregate of all statistics sources.
///
/// Snapshots are immutable once built; a refresh replaces the whole value or
/// nothing. Consumers never observe a half-updated mix of sub-records.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    pub patients: PatientStatistics,
    pub doctors: DoctorStatistics,
    pub appointments: AppointmentStatistics,
    /// When the aggregate was assembled
    pub fetched_at: DateTime<Utc>,
}

impl StatisticsSnapshot {
    pub fn new(
        patients: PatientStatistics,
        doctors: DoctorStatistics,
        appointments: AppointmentStatistics,
    ) -> Self {
        Self {
            patients,
            doctors,
            appointments,
            fetched_at: Utc::now(),
        }
    }
}

/// The aggregator's single authoritative loading status.
///
/// Exactly one value is live at a time. The default display contract is to
/// render only `Ready` snapshots and an indicator otherwise; stale-while-
/// revalidate consumers read the aggregator's last-good slot explicitly.
#[derive(Debug, Clone)]
pub enum FetchState {
    /// No fetch has been issued yet
    Idle,
    /// A refresh is in flight
    Loading,
    /// All three sources settled successfully
    Ready(Arc<StatisticsSnapshot>),
    /// At least one source failed; no partial data is available
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// The snapshot, when ready
    pub fn snapshot(&self) -> Option<&Arc<StatisticsSnapshot>> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// The failure message, when failed
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

//! Booking Backend API
//!
//! Client-side contract for the practice management backend.
//!
//! # Endpoints
//!
//! ## Statistics
//! - `GET /api/patients/statistics/` - Patient counts and breakdowns
//! - `GET /api/doctors/statistics/` - Doctor counts and breakdowns
//! - `GET /api/appointments/statistics/` - Appointment counts and breakdowns
//!
//! ## Admin
//! - `POST /api/admin/create-sample-data` - Seed the database with sample records
//! - `POST /api/admin/clear-database` - Drop all collections (destructive)
//! - `GET /api/admin/database-stats` - Raw collection statistics
//!
//! ## Health
//! - `GET /health` - Backend liveness check

mod client;
mod dto;

pub use client::BackendClient;
pub use dto::{
    AdminOutcome, AdminResponse, AppointmentStatistics, DoctorStatistics, HealthResponse,
    PatientStatistics,
};

use async_trait::async_trait;

/// Common trait for backend access
///
/// The dashboard aggregator talks to the backend through this seam so tests
/// can substitute a scripted implementation.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Fetch patient statistics
    async fn patient_statistics(&self) -> Result<PatientStatistics, BackendError>;

    /// Fetch doctor statistics
    async fn doctor_statistics(&self) -> Result<DoctorStatistics, BackendError>;

    /// Fetch appointment statistics
    async fn appointment_statistics(&self) -> Result<AppointmentStatistics, BackendError>;

    /// Seed the database with sample records
    async fn seed_sample_data(&self) -> Result<AdminOutcome, BackendError>;

    /// Drop all database collections
    async fn clear_database(&self) -> Result<AdminOutcome, BackendError>;

    /// Check if the backend is up
    async fn health_check(&self) -> Result<HealthResponse, BackendError>;

    /// Fetch raw collection statistics
    async fn database_stats(&self) -> Result<AdminOutcome, BackendError>;
}

/// Errors that can occur when communicating with the backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Admin command failed: {0}")]
    Admin(String),
}

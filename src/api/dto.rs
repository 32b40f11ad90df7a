//! Data Transfer Objects
//!
//! Response types for the booking backend endpoints.
//! These types are deserialized from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Patient statistics as served by `GET /api/patients/statistics/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatientStatistics {
    pub total_patients: u64,
    pub new_this_month: u64,
    #[serde(default)]
    pub by_gender: HashMap<String, u64>,
    #[serde(default)]
    pub by_age_group: HashMap<String, u64>,
}

/// Doctor statistics as served by `GET /api/doctors/statistics/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoctorStatistics {
    pub total_doctors: u64,
    pub available_doctors: u64,
    #[serde(default)]
    pub by_specialty: HashMap<String, u64>,
    #[serde(default)]
    pub by_department: HashMap<String, u64>,
    #[serde(default)]
    pub by_experience: HashMap<String, u64>,
}

/// Appointment statistics as served by `GET /api/appointments/statistics/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppointmentStatistics {
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    #[serde(default)]
    pub by_status: HashMap<String, u64>,
    #[serde(default)]
    pub by_doctor: HashMap<String, u64>,
}

/// Raw admin endpoint reply.
///
/// The backend answers admin commands with HTTP 200 in both directions and
/// signals failure through a populated `error` field.
#[derive(Debug, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub output: Option<String>,
}

/// Successful outcome of an admin command
#[derive(Debug, Clone)]
pub struct AdminOutcome {
    /// Human-readable confirmation from the backend
    pub message: String,
    /// Raw script output, when the backend includes it
    pub output: Option<String>,
}

/// Health check reply from `GET /health`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

//! Backend REST API Client
//!
//! HTTP client for communicating with the booking backend's REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::dto::{
    AdminOutcome, AdminResponse, AppointmentStatistics, DoctorStatistics, HealthResponse,
    PatientStatistics,
};
use crate::api::{BackendApi, BackendError};
use crate::config::BackendConfig;

/// Booking backend REST API client
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new backend client with the given configuration
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "GET");

        let response = self.client.get(&url).send().await.map_err(classify)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, message });
        }

        response.json().await.map_err(classify)
    }

    /// Send an admin POST and interpret the success/error body
    async fn post_admin(&self, path: &str) -> Result<AdminOutcome, BackendError> {
        let url = self.url(path);
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %url, "POST");

        let response = self.client.post(&url).send().await.map_err(classify)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, message });
        }

        let reply: AdminResponse = response.json().await.map_err(classify)?;
        admin_outcome(reply)
    }
}

#[async_trait]
impl BackendApi for BackendClient {
    async fn patient_statistics(&self) -> Result<PatientStatistics, BackendError> {
        self.get_json("/api/patients/statistics/").await
    }

    async fn doctor_statistics(&self) -> Result<DoctorStatistics, BackendError> {
        self.get_json("/api/doctors/statistics/").await
    }

    async fn appointment_statistics(&self) -> Result<AppointmentStatistics, BackendError> {
        self.get_json("/api/appointments/statistics/").await
    }

    async fn seed_sample_data(&self) -> Result<AdminOutcome, BackendError> {
        self.post_admin("/api/admin/create-sample-data").await
    }

    async fn clear_database(&self) -> Result<AdminOutcome, BackendError> {
        self.post_admin("/api/admin/clear-database").await
    }

    async fn health_check(&self) -> Result<HealthResponse, BackendError> {
        self.get_json("/health").await
    }

    async fn database_stats(&self) -> Result<AdminOutcome, BackendError> {
        let reply: AdminResponse = self.get_json("/api/admin/database-stats").await?;
        admin_outcome(reply)
    }
}

/// Interpret the admin reply body: a populated `error` field is a failure
/// even under a 2xx status.
fn admin_outcome(reply: AdminResponse) -> Result<AdminOutcome, BackendError> {
    if let Some(error) = reply.error {
        return Err(BackendError::Admin(error));
    }

    Ok(AdminOutcome {
        message: reply.message.unwrap_or_else(|| "ok".to_string()),
        output: reply.output,
    })
}

/// Map transport-level failures onto the backend error taxonomy
fn classify(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::Unavailable
    } else if e.is_decode() {
        BackendError::Decode(e.to_string())
    } else {
        BackendError::Request(e)
    }
}

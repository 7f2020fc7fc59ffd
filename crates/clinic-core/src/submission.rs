//! Delivery of appointment requests.
//!
//! The page does not talk to a real booking service yet. [`SimulatedClient`]
//! stands in for it with a fixed latency; anything implementing
//! [`SubmissionClient`] can replace it without touching the form workflow.

use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClinicResult;

/// A validated appointment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub specialty: String,
    pub practitioner: Option<String>,
    pub comment: Option<String>,
}

/// Asynchronous booking service.
pub trait SubmissionClient {
    fn submit(
        &self,
        request: AppointmentRequest,
    ) -> impl Future<Output = ClinicResult<()>> + Send;
}

/// Booking service stand-in that accepts every request after a delay.
#[derive(Debug, Clone)]
pub struct SimulatedClient {
    latency: Duration,
}

impl SimulatedClient {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmissionClient for SimulatedClient {
    fn submit(
        &self,
        request: AppointmentRequest,
    ) -> impl Future<Output = ClinicResult<()>> + Send {
        let latency = self.latency;
        async move {
            match serde_json::to_string(&request) {
                Ok(payload) => tracing::info!(%payload, "Submitting appointment request"),
                Err(e) => tracing::warn!("Could not serialize appointment request: {}", e),
            }
            tokio::time::sleep(latency).await;
            tracing::info!(specialty = %request.specialty, date = %request.date, "Appointment request accepted");
            Ok(())
        }
    }
}

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, error};

use shared_config::AppConfig;

use doctor_cell::models::Doctor;

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("mail provider is not configured")]
    NotConfigured,

    #[error("mail provider error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the transactional mail provider's HTTP API.
///
/// The booking flow treats every error from here as best-effort: callers log
/// the failure and keep the committed appointment.
pub struct MailClient {
    client: Client,
    base_url: String,
    api_key: String,
    from_address: String,
}

impl MailClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from_address: config.mail_from_address.clone(),
        }
    }

    /// Email the doctor about a freshly persisted booking.
    pub async fn notify_doctor_of_booking(
        &self,
        doctor: &Doctor,
        date: &str,
        time: &str,
    ) -> Result<(), NotifyError> {
        if self.base_url.is_empty() || self.from_address.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let url = format!("{}/v1/send", self.base_url);
        debug!("Sending booking notification to {}", doctor.email);

        let body = json!({
            "from": self.from_address,
            "to": doctor.email,
            "subject": "New Appointment",
            "text": format!("A patient booked an appointment on {} at {}.", date, time),
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Mail provider error ({}): {}", status, message);
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Booking notification accepted for {}", doctor.email);
        Ok(())
    }
}

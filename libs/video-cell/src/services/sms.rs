use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::VideoError;

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Twilio messaging API (form-encoded, basic auth).
pub struct SmsClient {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl SmsClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.twilio_base_url.clone(),
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
            from_number: config.twilio_phone_number.clone(),
        }
    }

    pub async fn send_message(&self, to: &str, body: &str) -> Result<(), VideoError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );
        debug!("Sending SMS to {}", to);

        let params = [("Body", body), ("From", self.from_number.as_str()), ("To", to)];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("SMS provider error ({}): {}", status, message);
            return Err(VideoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

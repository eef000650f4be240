use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{CreateRoomRequest, RoomProperties, RoomResponse, VideoError};

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Daily-style room-provisioning API.
pub struct DailyVideoClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl DailyVideoClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.daily_base_url.clone(),
            api_key: config.daily_api_key.clone(),
        }
    }

    /// Provision a temporary video room and return its join URL.
    pub async fn create_room(&self) -> Result<String, VideoError> {
        let url = format!("{}/rooms", self.base_url);
        debug!("Requesting video room from {}", url);

        let request = CreateRoomRequest {
            properties: RoomProperties {
                enable_chat: true,
                enable_screenshare: true,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Video provider error ({}): {}", status, message);
            return Err(VideoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let room: RoomResponse = response.json().await.map_err(VideoError::Transport)?;

        if room.url.is_empty() {
            return Err(VideoError::MissingRoomUrl);
        }

        info!("Provisioned video room {}", room.url);
        Ok(room.url)
    }
}

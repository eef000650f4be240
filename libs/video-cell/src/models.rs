use serde::{Deserialize, Serialize};

/// Room-creation payload for the video provider. Rooms are temporary; the
/// provider owns their lifecycle and nothing is persisted locally.
#[derive(Debug, Serialize)]
pub struct CreateRoomRequest {
    pub properties: RoomProperties,
}

#[derive(Debug, Serialize)]
pub struct RoomProperties {
    pub enable_chat: bool,
    pub enable_screenshare: bool,
}

#[derive(Debug, Deserialize)]
pub struct RoomResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartVoiceCallRequest {
    pub doctor_phone: String,
    pub patient_external_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("provider returned no room url")]
    MissingRoomUrl,

    #[error("provider error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

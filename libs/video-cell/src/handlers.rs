use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{StartVoiceCallRequest, VideoError};
use crate::services::{DailyVideoClient, SmsClient};

fn map_video_error(e: VideoError, generic: &str) -> AppError {
    match e {
        VideoError::ValidationError(msg) => AppError::ValidationError(msg),
        VideoError::MissingRoomUrl | VideoError::Api { .. } | VideoError::Transport(_) => {
            AppError::Upstream(generic.to_string())
        }
    }
}

#[axum::debug_handler]
pub async fn create_daily_meeting(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let video = DailyVideoClient::new(&state);

    let link = video
        .create_room()
        .await
        .map_err(|e| map_video_error(e, "Failed to create meeting room."))?;

    Ok(Json(json!({ "link": link })))
}

/// Text the doctor a join link for an ad-hoc consultation room. The room
/// name is derived from the patient's external id; the frontend resolves it
/// to an actual call page.
#[axum::debug_handler]
pub async fn start_voice_call(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<StartVoiceCallRequest>,
) -> Result<Json<Value>, AppError> {
    if request.doctor_phone.trim().is_empty() || request.patient_external_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "doctorPhone and patientExternalId are required".to_string(),
        ));
    }

    let room_name = format!("quickclinic-{}", request.patient_external_id);
    let video_url = format!("{}/video-call?room={}", state.app_base_url, room_name);

    let sms = SmsClient::new(&state);
    sms.send_message(
        request.doctor_phone.trim(),
        &format!("You have a video consultation. Join here: {}", video_url),
    )
    .await
    .map_err(|e| map_video_error(e, "Failed to send call invite."))?;

    Ok(Json(json!({
        "message": "SMS sent to doctor",
        "roomName": room_name
    })))
}

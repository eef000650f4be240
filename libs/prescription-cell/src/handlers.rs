use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{PrescriptionError, UploadPrescriptionRequest};
use crate::services::PrescriptionService;

#[axum::debug_handler]
pub async fn upload_prescription(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<UploadPrescriptionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = PrescriptionService::new(&state);

    let prescription = service.upload(request).await.map_err(|e| match e {
        PrescriptionError::ValidationError(msg) => AppError::ValidationError(msg),
        PrescriptionError::Store(msg) => AppError::Database(msg),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Prescription uploaded",
            "prescriptionId": prescription.id
        })),
    ))
}

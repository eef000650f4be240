use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CreateDoctorRequest, DoctorError};
use crate::services::DoctorDirectoryService;

#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub query: Option<String>,
}

fn map_doctor_error(e: DoctorError) -> AppError {
    match e {
        DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
        DoctorError::InvalidId(id) => AppError::BadRequest(format!("Invalid doctor id: {}", id)),
        DoctorError::ValidationError(msg) => AppError::ValidationError(msg),
        DoctorError::Store(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorDirectoryService::new(&state);

    let doctor = service
        .get_by_id(&doctor_id)
        .await
        .map_err(map_doctor_error)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorDirectoryService::new(&state);

    let doctors = service
        .search(query.query.as_deref())
        .await
        .map_err(map_doctor_error)?;

    Ok(Json(json!(doctors)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = DoctorDirectoryService::new(&state);

    service.create(request).await.map_err(map_doctor_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Doctor added successfully" })),
    ))
}

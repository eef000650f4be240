use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{CreateUserRequest, IdentityError};
use crate::services::IdentityService;

fn map_identity_error(e: IdentityError) -> AppError {
    match e {
        IdentityError::NotFound => AppError::NotFound("User not found".to_string()),
        IdentityError::ValidationError(msg) => AppError::ValidationError(msg),
        IdentityError::Store(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = IdentityService::new(&state);

    service
        .ensure_user(request)
        .await
        .map_err(map_identity_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Patient created" })),
    ))
}

#[axum::debug_handler]
pub async fn get_user_role(
    State(state): State<Arc<AppConfig>>,
    Path(external_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = IdentityService::new(&state);

    let role = service
        .get_role(&external_id)
        .await
        .map_err(map_identity_error)?;

    Ok(Json(json!({ "role": role })))
}

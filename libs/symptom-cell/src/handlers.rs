use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use doctor_cell::services::DoctorDirectoryService;

use crate::models::{AdviceError, SymptomCheckRequest};
use crate::services::SymptomAdviceClient;

fn map_advice_error(e: AdviceError, generic: &str) -> AppError {
    match e {
        AdviceError::ValidationError(msg) => AppError::ValidationError(msg),
        // Provider detail stays in the logs, not the response.
        AdviceError::NoSuggestion | AdviceError::Api { .. } | AdviceError::Transport(_) => {
            AppError::Upstream(generic.to_string())
        }
    }
}

#[axum::debug_handler]
pub async fn symptom_checker(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SymptomCheckRequest>,
) -> Result<Json<Value>, AppError> {
    let advice = SymptomAdviceClient::new(&state);

    let diagnosis = advice
        .suggest(&request.symptoms)
        .await
        .map_err(|e| map_advice_error(e, "Failed to generate diagnosis."))?;

    Ok(Json(json!({ "diagnosis": diagnosis })))
}

/// AI-assisted doctor suggestion: ask the provider for a specialty, then
/// search the directory for doctors matching it.
#[axum::debug_handler]
pub async fn suggest_doctors(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SymptomCheckRequest>,
) -> Result<Json<Value>, AppError> {
    let advice = SymptomAdviceClient::new(&state);

    let specialty = advice
        .suggest_specialty(&request.symptoms)
        .await
        .map_err(|e| map_advice_error(e, "AI suggestion failed."))?;

    let directory = DoctorDirectoryService::new(&state);
    let doctors = directory
        .search(Some(&specialty))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(json!({
        "suggestion": specialty,
        "doctors": doctors
    })))
}

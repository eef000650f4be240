use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::AppointmentBookingService;

fn map_appointment_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::DoctorNotFound => AppError::NotFound("Doctor not found".to_string()),
        AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        AppointmentError::Store(msg) => AppError::Database(msg),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = AppointmentBookingService::new(&state);

    let appointment = service.book(request).await.map_err(map_appointment_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Appointment booked",
            "appointmentId": appointment.id
        })),
    ))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(state): State<Arc<AppConfig>>,
    Path(patient_external_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentBookingService::new(&state);

    let appointments = service
        .list_for_patient(&patient_external_id)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!(appointments)))
}

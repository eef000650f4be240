use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/appointments", post(handlers::book_appointment))
        .route(
            "/appointments/{patient_external_id}",
            get(handlers::get_patient_appointments),
        )
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::get,
};
use serde_json::json;

use appointment_cell::router::appointment_routes;
use doctor_cell::router::doctor_routes;
use identity_cell::router::identity_routes;
use prescription_cell::router::prescription_routes;
use shared_config::AppConfig;
use symptom_cell::router::symptom_routes;
use video_cell::router::video_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    let api = Router::new()
        .route("/test", get(|| async { Json(json!({ "message": "API is working!" })) }))
        .merge(identity_routes(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(appointment_routes(state.clone()))
        .merge(prescription_routes(state.clone()))
        .merge(symptom_routes(state.clone()))
        .merge(video_routes(state.clone()));

    Router::new()
        .route("/", get(|| async { "QuickClinic API is running!" }))
        .nest("/api", api)
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/doctor/{doctor_id}", get(handlers::get_doctor))
        .route("/search-doctors", get(handlers::search_doctors))
        .route("/doctors", post(handlers::create_doctor))
        .with_state(state)
}

use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn symptom_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/symptom-checker", post(handlers::symptom_checker))
        .route("/suggest-doctors", post(handlers::suggest_doctors))
        .with_state(state)
}

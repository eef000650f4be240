use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn prescription_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/prescriptions", post(handlers::upload_prescription))
        .with_state(state)
}

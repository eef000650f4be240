use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn identity_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/users", post(handlers::create_user))
        .route("/users/{external_id}", get(handlers::get_user_role))
        .with_state(state)
}

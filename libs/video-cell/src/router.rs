use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn video_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/create-daily-meeting", post(handlers::create_daily_meeting))
        .route("/start-voice-call", post(handlers::start_voice_call))
        .with_state(state)
}

mod health;
mod practice;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/next-word", get(practice::next_word))
        .route("/api/check-answer", post(practice::check_answer))
        .route("/api/progress", get(practice::progress))
        .route("/api/reset", post(practice::reset))
        .route("/health", get(health::health))
        .fallback(fallback_handler)
        .with_state(state)
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "no such endpoint").into_response()
}

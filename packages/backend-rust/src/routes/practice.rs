use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::AppError;
use crate::services::practice::{self, CheckAnswerRequest, PracticeError};
use crate::state::AppState;

pub async fn next_word(State(state): State<AppState>) -> Response {
    match practice::next_word(state.catalog(), state.store()).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => error_response(err, "next word selection failed"),
    }
}

pub async fn check_answer(
    State(state): State<AppState>,
    Json(request): Json<CheckAnswerRequest>,
) -> Response {
    match practice::submit_answer(
        state.catalog(),
        state.store(),
        request.word_id,
        &request.answer,
    )
    .await
    {
        Ok(body) => Json(body).into_response(),
        Err(err) => error_response(err, "answer submission failed"),
    }
}

pub async fn progress(State(state): State<AppState>) -> Response {
    match practice::summary(state.catalog(), state.store()).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => error_response(err, "progress summary failed"),
    }
}

pub async fn reset(State(state): State<AppState>) -> Response {
    match practice::reset(state.store()).await {
        Ok(body) => Json(body).into_response(),
        Err(err) => error_response(err, "progress reset failed"),
    }
}

fn error_response(err: PracticeError, context: &'static str) -> Response {
    match err {
        PracticeError::WordNotFound(word_id) => {
            AppError::not_found(format!("word {word_id} not found")).into_response()
        }
        err => {
            tracing::warn!(error = %err, "{context}");
            AppError::internal(err.to_string()).into_response()
        }
    }
}

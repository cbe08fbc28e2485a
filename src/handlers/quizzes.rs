//! Quiz handler.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::service::{QuizRequest, TriviaService};
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /quizzes
pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::play_quiz(state.store.as_ref(), req).await?;
    Ok(Json(body))
}

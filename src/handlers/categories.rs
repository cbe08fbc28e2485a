//! Category handlers: list and per-category questions.

use crate::error::AppError;
use crate::extractors::IntId;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::categories(state.store.as_ref()).await?;
    Ok(Json(body))
}

/// GET /categories/:id/questions
pub async fn category_questions(
    State(state): State<AppState>,
    IntId(id): IntId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::category_questions(state.store.as_ref(), &state.settings, id).await?;
    Ok(Json(body))
}

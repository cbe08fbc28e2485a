//! Question handlers: paginated list, create, delete, search.

use crate::error::AppError;
use crate::extractors::{ApiJson, IntId, PageParam};
use crate::service::{CreateQuestionRequest, SearchRequest, TriviaService};
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::question_page(state.store.as_ref(), page).await?;
    Ok(Json(body))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::create_question(state.store.as_ref(), req).await?;
    Ok(Json(body))
}

/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    IntId(id): IntId,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::delete_question(state.store.as_ref(), id).await?;
    Ok(Json(body))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = TriviaService::search(state.store.as_ref(), req).await?;
    Ok(Json(body))
}

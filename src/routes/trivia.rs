//! Trivia API routes.

use crate::handlers::{
    category_questions, create_question, delete_question, list_categories, list_questions, not_found,
    play_quiz, search_questions,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn trivia_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(category_questions))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        // only DELETE is defined on a single question; other methods do not match the route
        .route("/questions/:id", delete(delete_question).fallback(not_found))
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}

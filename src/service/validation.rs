//! Typed request bodies and the validation step that runs before any store access.

use crate::deserializers::{deserialize_lenient_i32, LenientI32};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::NewQuestion;
use serde::Deserialize;
use std::collections::HashSet;

/// `POST /questions`. Every field is optional; absent fields are stored as NULL.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub category: Option<i32>,
}

impl JsonBody for CreateQuestionRequest {
    fn rejected(detail: String) -> AppError {
        AppError::Unprocessable(detail)
    }
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: req.question,
            answer: req.answer,
            difficulty: req.difficulty,
            category: req.category,
        }
    }
}

/// `POST /questions/search`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl JsonBody for SearchRequest {
    fn rejected(detail: String) -> AppError {
        AppError::NotFound(detail)
    }
}

impl SearchRequest {
    /// Absent or null means the empty term, which matches every question.
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub id: Option<i32>,
}

/// `POST /quizzes`.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<LenientI32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl JsonBody for QuizRequest {
    fn rejected(detail: String) -> AppError {
        AppError::Unprocessable(detail)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuiz {
    /// `None` draws from every category.
    pub category: Option<i32>,
    pub previous: HashSet<i32>,
}

impl QuizRequest {
    pub fn validate(self) -> Result<ValidQuiz, AppError> {
        let category = self
            .quiz_category
            .ok_or_else(|| AppError::Unprocessable("quiz_category is required".into()))?;
        let id = category
            .id
            .ok_or_else(|| AppError::Unprocessable("quiz_category.id is required".into()))?;
        let previous = self
            .previous_questions
            .unwrap_or_default()
            .into_iter()
            .map(|LenientI32(id)| id)
            .collect();
        Ok(ValidQuiz {
            category: if id == 0 { None } else { Some(id) },
            previous,
        })
    }
}

//! Success envelopes. Every body carries `success: true`; field names follow the front-end's camelCase.

use crate::model::{CategoryMap, QuestionView};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CategoriesBody {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageBody {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: String,
}

#[derive(Serialize, Debug)]
pub struct DeletedBody {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBody {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Shared by search (`currentCategory` empty) and the per-category listing (category label).
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListBody {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Serialize, Debug)]
pub struct QuizBody {
    pub success: bool,
    /// `null` once the pool has no unasked question left.
    pub question: Option<QuestionView>,
}

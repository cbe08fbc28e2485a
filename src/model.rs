//! Persistence records: questions and categories.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trivia question. Every column except `id` is nullable because creation accepts partial bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

impl Question {
    /// Plain mapping sent to clients: `{id, question, answer, difficulty, category}`.
    pub fn format(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

/// Insertable question; absent fields are stored as NULL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

impl NewQuestion {
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id -> label, serialized as a JSON object keyed by the id.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

pub fn format_all(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(Question::format).collect()
}

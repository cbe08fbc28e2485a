//! In-process `TriviaStore` for tests and database-free runs.

use super::TriviaStore;
use crate::error::StoreError;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// BTreeMaps keep rows in id order, matching the `ORDER BY id` of the SQL backend.
#[derive(Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with fixed rows. Generated question ids continue after the largest seeded id.
    pub fn with_data(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        MemoryTriviaStore {
            tables: RwLock::new(Tables {
                categories: categories.into_iter().map(|c| (c.id, c)).collect(),
                questions: questions.into_iter().map(|q| (q.id, q)).collect(),
                next_question_id,
            }),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> Result<R, StoreError> {
        let guard = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&guard))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> Result<R, StoreError> {
        let mut guard = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut guard))
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.read(|t| t.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        self.read(|t| t.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.read(|t| t.questions.values().cloned().collect())
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        self.read(|t| t.questions.len() as i64)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        self.read(|t| t.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        self.write(|t| {
            let id = t.next_question_id.max(1);
            t.next_question_id = id + 1;
            let question = new.into_question(id);
            t.questions.insert(id, question.clone());
            question
        })
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        self.write(|t| t.questions.remove(&id).is_some())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        self.read(|t| {
            t.questions
                .values()
                .filter(|q| {
                    q.question
                        .as_deref()
                        .map(|text| text.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
                .cloned()
                .collect()
        })
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        self.read(|t| {
            t.questions
                .values()
                .filter(|q| q.category == Some(category))
                .cloned()
                .collect()
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read(|_| ())
    }
}

//! Persistence seam. Handlers only see `TriviaStore`; PostgreSQL and in-memory backends implement it.

mod bootstrap;
mod memory;
mod postgres;

pub use bootstrap::{ensure_database_exists, ensure_tables, seed_default_categories, DEFAULT_CATEGORIES};
pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;

use crate::error::StoreError;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    /// All questions ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn count_questions(&self) -> Result<i64, StoreError>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError>;

    /// Insert and return the stored row with its generated id.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Returns false when no row had that id.
    async fn delete_question(&self, id: i32) -> Result<bool, StoreError>;

    /// Case-insensitive substring match on the question text, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Escape LIKE metacharacters so the term matches literally inside `%...%`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

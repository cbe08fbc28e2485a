//! `TriviaStore` over PostgreSQL.

use super::{like_pattern, TriviaStore};
use crate::error::StoreError;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;
use sqlx::PgPool;

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        PgTriviaStore { pool }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Question>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn count_questions(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let sql = format!(
            "INSERT INTO questions (question, answer, difficulty, category) VALUES ($1, $2, $3, $4) RETURNING {}",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Question>(&sql)
            .bind(&new.question)
            .bind(&new.answer)
            .bind(new.difficulty)
            .bind(new.category)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id",
            QUESTION_COLUMNS
        );
        let pattern = like_pattern(term);
        tracing::debug!(sql = %sql, pattern = %pattern, "query");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, category, "query");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

//! Route operations. Each funnels any store failure into the status its route reports.

use crate::config::ApiSettings;
use crate::error::{AppError, StoreResultExt};
use crate::model::{category_map, format_all, NewQuestion};
use crate::response::{
    CategoriesBody, CreatedBody, DeletedBody, QuestionListBody, QuestionPageBody, QuizBody,
};
use crate::service::pagination::paginate;
use crate::service::quiz::next_question;
use crate::service::validation::{CreateQuestionRequest, QuizRequest, SearchRequest};
use crate::store::TriviaStore;

pub struct TriviaService;

impl TriviaService {
    /// All categories as an id -> label map. Failure: 400.
    pub async fn categories(store: &dyn TriviaStore) -> Result<CategoriesBody, AppError> {
        let categories = store.list_categories().await.or_bad_request()?;
        Ok(CategoriesBody {
            success: true,
            categories: category_map(&categories),
        })
    }

    /// One page of every question plus the category map. Empty page or failure: 404.
    pub async fn question_page(store: &dyn TriviaStore, page: i64) -> Result<QuestionPageBody, AppError> {
        let selection = store.list_questions().await.or_not_found()?;
        let current = paginate(&selection, page);
        let categories = store.list_categories().await.or_not_found()?;
        if current.is_empty() {
            return Err(AppError::NotFound(format!("page {} is empty", page)));
        }
        Ok(QuestionPageBody {
            success: true,
            questions: format_all(current),
            total_questions: selection.len(),
            categories: category_map(&categories),
            current_category: String::new(),
        })
    }

    /// Delete by id. A missing id is reported like any other failure: 422.
    pub async fn delete_question(store: &dyn TriviaStore, id: i64) -> Result<DeletedBody, AppError> {
        let id = i32::try_from(id)
            .map_err(|_| AppError::Unprocessable(format!("question id {} is out of range", id)))?;
        let question = store
            .find_question(id)
            .await
            .or_unprocessable()?
            .ok_or_else(|| AppError::Unprocessable(format!("question {} does not exist", id)))?;
        if !store.delete_question(question.id).await.or_unprocessable()? {
            return Err(AppError::Unprocessable(format!("question {} was already deleted", id)));
        }
        tracing::info!(id = question.id, "question deleted");
        Ok(DeletedBody {
            success: true,
            deleted: question.id,
        })
    }

    /// Insert, then answer with the first page of all questions. Failure: 422.
    pub async fn create_question(
        store: &dyn TriviaStore,
        req: CreateQuestionRequest,
    ) -> Result<CreatedBody, AppError> {
        let new: NewQuestion = req.into();
        let question = store.insert_question(new).await.or_unprocessable()?;
        tracing::info!(id = question.id, "question created");
        let selection = store.list_questions().await.or_unprocessable()?;
        let current = paginate(&selection, 1);
        if current.is_empty() {
            return Err(AppError::NotFound("no questions after insert".into()));
        }
        Ok(CreatedBody {
            success: true,
            created: question.id,
            questions: format_all(current),
            total_questions: selection.len(),
            current_category: String::new(),
        })
    }

    /// First page of questions whose text contains the term, case-insensitively.
    /// `totalQuestions` is the size of that page, not the match count. Empty page or failure: 404.
    pub async fn search(store: &dyn TriviaStore, req: SearchRequest) -> Result<QuestionListBody, AppError> {
        let selection = store.search_questions(req.term()).await.or_not_found()?;
        let current = paginate(&selection, 1);
        if current.is_empty() {
            return Err(AppError::NotFound(format!("no question matches {:?}", req.term())));
        }
        Ok(QuestionListBody {
            success: true,
            questions: format_all(current),
            total_questions: current.len(),
            current_category: String::new(),
        })
    }

    /// Every question in one category, unpaginated, with the global question count. Failure: 400.
    pub async fn category_questions(
        store: &dyn TriviaStore,
        settings: &ApiSettings,
        id: i64,
    ) -> Result<QuestionListBody, AppError> {
        if let Some(max) = settings.max_category_id {
            if id > i64::from(max) {
                return Err(AppError::BadRequest(format!("category {} is above {}", id, max)));
            }
        }
        let id = i32::try_from(id)
            .map_err(|_| AppError::BadRequest(format!("category {} is out of range", id)))?;
        let questions = store.questions_in_category(id).await.or_bad_request()?;
        let category = store
            .find_category(id)
            .await
            .or_bad_request()?
            .ok_or_else(|| AppError::BadRequest(format!("category {} does not exist", id)))?;
        let total = store.count_questions().await.or_bad_request()?;
        Ok(QuestionListBody {
            success: true,
            questions: format_all(&questions),
            total_questions: usize::try_from(total).unwrap_or_default(),
            current_category: category.kind,
        })
    }

    /// Draw a random unasked question from the category pool. Empty pool or failure: 422.
    pub async fn play_quiz(store: &dyn TriviaStore, req: QuizRequest) -> Result<QuizBody, AppError> {
        let quiz = req.validate()?;
        let pool = match quiz.category {
            None => store.list_questions().await,
            Some(id) => store.questions_in_category(id).await,
        }
        .or_unprocessable()?;
        if pool.is_empty() {
            return Err(AppError::Unprocessable(format!(
                "no questions for category {:?}",
                quiz.category
            )));
        }
        let question = next_question(&pool, &quiz.previous, &mut rand::thread_rng()).map(|q| q.format());
        if question.is_none() {
            tracing::debug!(asked = quiz.previous.len(), "quiz exhausted");
        }
        Ok(QuizBody {
            success: true,
            question,
        })
    }
}

//! Business operations behind the HTTP handlers.

mod pagination;
mod quiz;
mod trivia;
mod validation;

pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::next_question;
pub use trivia::TriviaService;
pub use validation::{CreateQuestionRequest, QuizCategory, QuizRequest, SearchRequest, ValidQuiz};

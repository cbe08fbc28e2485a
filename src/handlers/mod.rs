//! HTTP handlers for categories, questions, quizzes, and the 404 fallback.

pub mod categories;
pub mod fallback;
pub mod questions;
pub mod quizzes;

pub use categories::*;
pub use fallback::*;
pub use questions::*;
pub use quizzes::*;

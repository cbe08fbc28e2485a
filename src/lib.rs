//! Trivia API: question CRUD, search and quiz play over PostgreSQL.

pub mod config;
pub mod deserializers;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{ApiSettings, Settings};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Category, NewQuestion, Question};
pub use routes::{app, common_routes_with_ready, trivia_routes};
pub use service::{TriviaService, QUESTIONS_PER_PAGE};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_tables, seed_default_categories, MemoryTriviaStore, PgTriviaStore, TriviaStore,
};

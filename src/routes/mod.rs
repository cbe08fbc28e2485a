//! Router assembly.

mod app;
mod common;
mod trivia;

pub use app::{app, cors_layer};
pub use common::common_routes_with_ready;
pub use trivia::trivia_routes;

//! Full application: API routes, health routes, static front-end, CORS and request tracing.

use crate::handlers::not_found;
use crate::routes::{common_routes_with_ready, trivia_routes};
use crate::state::AppState;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, Method};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Any origin; the front-end is served from elsewhere during development.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Everything the server mounts. `static_dir` holds the pre-built front-end; `/` serves its `index.html`.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(static_dir.as_ref())
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(trivia_routes(state))
        .fallback_service(static_files)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

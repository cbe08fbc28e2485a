//! 404 fallback for unmatched routes.

use crate::error::AppError;
use axum::http::Uri;

/// Unmatched routes and static files get the 404 envelope.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

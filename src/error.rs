//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Request failure. The detail string is logged; clients only see the fixed envelope for the status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    pub fn for_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            StatusCode::BAD_REQUEST => "bad request",
            _ => "internal server error",
        };
        ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Store(e) => tracing::error!(error = %e, "unhandled store error"),
            other => tracing::info!(status = status.as_u16(), detail = %other, "request failed"),
        }
        (status, Json(ErrorBody::for_status(status))).into_response()
    }
}

/// Funnel a store failure into the status a route reports for any failure.
pub trait StoreResultExt<T> {
    fn or_not_found(self) -> Result<T, AppError>;
    fn or_unprocessable(self) -> Result<T, AppError>;
    fn or_bad_request(self) -> Result<T, AppError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn or_not_found(self) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "store error");
            AppError::NotFound(e.to_string())
        })
    }

    fn or_unprocessable(self) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "store error");
            AppError::Unprocessable(e.to_string())
        })
    }

    fn or_bad_request(self) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!(error = %e, "store error");
            AppError::BadRequest(e.to_string())
        })
    }
}

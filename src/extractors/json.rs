//! JSON body extractor that rejects with the error envelope instead of axum's plain-text rejection.
//!
//! A body that is not a JSON object (wrong content type, bad syntax, a bare scalar or array) is a 400.
//! A well-formed object whose fields have the wrong types fails with the status its route reports for
//! any failure, chosen by [`JsonBody::rejected`].

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A request body with its own failure status for field-level type errors.
pub trait JsonBody: DeserializeOwned {
    fn rejected(detail: String) -> AppError;
}

#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: JsonBody,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body is not a JSON object".into()));
        }
        serde_json::from_value(value)
            .map(ApiJson)
            .map_err(|e| T::rejected(e.to_string()))
    }
}

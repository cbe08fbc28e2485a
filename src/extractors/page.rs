//! `?page=N` with lenient coercion: missing or unparsable means page 1.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParam(pub i64);

impl Default for PageParam {
    fn default() -> Self {
        PageParam(1)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.get("page").and_then(|v| v.trim().parse::<i64>().ok()))
            .map(PageParam)
            .unwrap_or_default();
        Ok(page)
    }
}

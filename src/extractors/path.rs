//! Integer path segment. A segment that is not all digits does not match the route, so it is a 404.
//! Digit strings too long for `i64` saturate; routes narrow the value and report their own status.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntId(pub i64);

fn parse_segment(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse::<i64>().unwrap_or(i64::MAX))
}

#[async_trait]
impl<S> FromRequestParts<S> for IntId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::NotFound(e.body_text()))?;
        parse_segment(&segment)
            .map(IntId)
            .ok_or_else(|| AppError::NotFound(format!("{:?} is not an integer id", segment)))
    }
}

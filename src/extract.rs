use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

pub const INVALID_BODY: &str = "Invalid request body";

/// JSON body extractor whose rejections come back as `400 {"error": ...}`
/// instead of axum's plain-text 415/422 responses. The decoder detail is
/// logged, not returned.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "rejected request body");
                Err(ApiError::bad_request(INVALID_BODY))
            }
        }
    }
}

/// Parses a path segment as a row id. Only plain positive decimal integers
/// are accepted; signs, whitespace and fractions are rejected.
pub fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}

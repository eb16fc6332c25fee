//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an integer user id from the `{id}` path segment
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("missing id path parameter"))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::bad_request(format!("id must be an integer, got '{}'", raw)))?;

        Ok(Self(id))
    }
}

/// JSON body that ignores the request's `Content-Type`.
///
/// Older clients send JSON with a form-encoded content type, so the body is
/// decoded whatever the header says. Decode failures become 400s.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("unable to read the request body: {}", e)))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::bad_request(format!("unable to decode the request body: {}", e)))?;

        Ok(Self(value))
    }
}

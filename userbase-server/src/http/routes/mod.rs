//! Route handlers organized by resource

use axum::http::{StatusCode, Uri};

use super::error::ApiError;

pub mod home;
pub mod users;

/// Fallback for paths no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
}

/// OPTIONS on any API route; real CORS preflights are answered by the CORS layer
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

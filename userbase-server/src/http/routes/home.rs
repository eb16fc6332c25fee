//! Home page endpoint

use axum::{routing::get, Router};

pub const GREETING: &str = "Welcome to userbase";

/// GET /
async fn home() -> &'static str {
    GREETING
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}

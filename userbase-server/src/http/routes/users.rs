//! User endpoints
//!
//! Paths keep the names existing clients call (`/api/getuser/{id}` and
//! friends) rather than a resource-style `/users/{id}` layout.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::preflight;
use crate::http::error::ApiError;
use crate::http::extractors::{UserId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewUser, User, UserPatch};

/// `{id, message}` body returned by create, update and delete
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub id: i64,
    pub message: String,
}

impl MutationResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "User created successfully".to_string(),
        }
    }

    pub fn updated(id: i64, affected: u64) -> Self {
        Self {
            id,
            message: format!("Total rows/record affected {}", affected),
        }
    }

    pub fn deleted(id: i64, affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "User deleted successfully. Total rows/record affected {}",
                affected
            ),
        }
    }
}

/// POST /api/createnewuser
async fn create_user(
    State(state): State<AppState>,
    ValidJson(new_user): ValidJson<NewUser>,
) -> Result<Json<MutationResponse>, ApiError> {
    let id = state.users.insert(&new_user).await?;
    tracing::info!(id, "Created user");
    Ok(Json(MutationResponse::created(id)))
}

/// GET /api/getuser/{id}
async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .fetch_one(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "user",
            id: id.to_string(),
        })?;
    Ok(Json(user))
}

/// GET /api/getuserlist
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.fetch_all().await?;
    Ok(Json(users))
}

/// PUT|PATCH /api/updateuser/{id} - merge supplied fields onto the stored row
async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidJson(patch): ValidJson<UserPatch>,
) -> Result<Json<MutationResponse>, ApiError> {
    if let Some(body_id) = patch.id.value().filter(|body_id| **body_id != id) {
        tracing::warn!(id, body_id, "Ignoring body id that differs from path id");
    }
    if patch.is_empty() {
        tracing::debug!(id, "Update carries no field values");
    }

    let affected = state.users.merge_update(id, &patch).await?;
    tracing::info!(id, affected, "Updated user");
    Ok(Json(MutationResponse::updated(id, affected)))
}

/// DELETE /api/deleteuser/{id}
async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<MutationResponse>, ApiError> {
    let affected = state.users.delete(id).await?;
    tracing::info!(id, affected, "Deleted user");
    Ok(Json(MutationResponse::deleted(id, affected)))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/getuser/{id}", get(get_user).options(preflight))
        .route("/api/getuserlist", get(list_users).options(preflight))
        .route("/api/createnewuser", post(create_user).options(preflight))
        .route("/api/deleteuser/{id}", delete(delete_user).options(preflight))
        .route(
            "/api/updateuser/{id}",
            put(update_user).patch(update_user).options(preflight),
        )
}

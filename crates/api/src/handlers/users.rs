//! Handlers for signup and the `/admin/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use parcelview_core::error::CoreError;
use parcelview_core::types::EntityId;
use parcelview_db::models::user::{CreateUser, User};
use parcelview_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /api/signup`.
///
/// Fields are optional at the serde level so a missing one maps to 400
/// rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Id issued by the auth vendor; generated server-side when absent.
    pub id: Option<EntityId>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// POST /api/signup
///
/// Creates an unapproved user record. Returns 201 with the created row;
/// duplicate emails surface as 409 via the unique index.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let email = non_empty(input.email, "email")?;
    let name = non_empty(input.name, "name")?;

    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        ))));
    }

    let create = CreateUser {
        id: input.id,
        email,
        name,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = %user.id, "User signed up (pending approval)");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/admin/users
///
/// List all users, newest first.
pub async fn list_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// POST /api/admin/users/{id}/approve
///
/// Approve a pending user. Idempotent.
pub async fn approve_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::approve(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = %user.id, "User approved");
    Ok(Json(user))
}

/// DELETE /api/admin/users/{id}
///
/// Delete a user. Returns 204 No Content.
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(user_id = %id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {field}"
        ))),
    }
}

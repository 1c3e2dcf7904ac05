//! Handlers for user management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem, UserListResponse};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

fn user_to_item(user: User) -> UserItem {
    UserItem {
        id: user.id,
        full_name: user.full_name,
        created_at: user.created_at,
    }
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state.user_service.get_users().await?;

    Ok(Json(UserListResponse {
        items: users.into_iter().map(user_to_item).collect(),
    }))
}

/// Creates a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Errors
///
/// Returns 400 if `full_name` is empty.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), AppError> {
    payload.validate()?;

    let user = state.user_service.create_user(payload.full_name).await?;

    Ok((StatusCode::CREATED, Json(user_to_item(user))))
}

/// Renames a user.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user doesn't exist.
/// Returns 400 if `full_name` is empty.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserItem>, AppError> {
    payload.validate()?;

    let user = state.user_service.update_user(id, payload.full_name).await?;

    Ok(Json(user_to_item(user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the user doesn't exist.
/// Returns 400 if the user still owns posts.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for tag management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::tag::{CreateTagRequest, TagItem, TagListResponse, UpdateTagRequest};
use crate::domain::entities::Tag;
use crate::error::AppError;
use crate::state::AppState;

fn tag_to_item(tag: Tag) -> TagItem {
    TagItem {
        id: tag.id,
        name: tag.name,
    }
}

/// Lists all tags.
///
/// # Endpoint
///
/// `GET /api/tags`
pub async fn tag_list_handler(
    State(state): State<AppState>,
) -> Result<Json<TagListResponse>, AppError> {
    let tags = state.tag_service.get_tags().await?;

    Ok(Json(TagListResponse {
        items: tags.into_iter().map(tag_to_item).collect(),
    }))
}

/// Creates a new tag.
///
/// # Endpoint
///
/// `POST /api/tags`
///
/// # Errors
///
/// Returns 400 if `name` is empty.
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<TagItem>), AppError> {
    payload.validate()?;

    let tag = state.tag_service.create_tag(payload.name).await?;

    Ok((StatusCode::CREATED, Json(tag_to_item(tag))))
}

/// Renames a tag.
///
/// # Endpoint
///
/// `PUT /api/tags/{id}`
///
/// # Errors
///
/// Returns 404 if the tag doesn't exist.
/// Returns 400 if `name` is empty.
pub async fn update_tag_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateTagRequest>,
) -> Result<Json<TagItem>, AppError> {
    payload.validate()?;

    let tag = state.tag_service.update_tag(id, payload.name).await?;

    Ok(Json(tag_to_item(tag)))
}

/// Deletes a tag.
///
/// # Endpoint
///
/// `DELETE /api/tags/{id}`
///
/// # Errors
///
/// Returns 404 if the tag doesn't exist.
/// Returns 400 if the tag is still linked to posts.
pub async fn delete_tag_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.tag_service.delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for post management endpoints.
//!
//! Posts are the one resource whose handlers go through multi-repository
//! orchestration: every write keeps the post-tag links in sync and every
//! response carries the aggregate view (post + resolved tags).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::post::{CreatePostRequest, PostItem, PostListResponse, UpdatePostRequest};
use crate::domain::entities::{NewPost, PostUpdate};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all posts with their tags, most recently created first.
///
/// # Endpoint
///
/// `GET /api/posts`
///
/// # Errors
///
/// All-or-nothing: a failed tag lookup for any post fails the whole request.
pub async fn post_list_handler(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, AppError> {
    let views = state.post_service.get_posts().await?;

    Ok(Json(PostListResponse {
        items: views.into_iter().map(PostItem::from).collect(),
    }))
}

/// Creates a post linked to the given tags.
///
/// # Endpoint
///
/// `POST /api/posts`
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 1,
///   "title": "Holiday in maldives",
///   "description": "Yeah yeah yeah",
///   "tag_ids": [1, 2, 3]   // optional, order-preserving
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails or a referenced user/tag does not exist.
pub async fn create_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostItem>), AppError> {
    payload.validate()?;

    let view = state
        .post_service
        .create_post(
            NewPost {
                user_id: payload.user_id,
                title: payload.title,
                description: payload.description,
            },
            payload.tag_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PostItem::from(view))))
}

/// Updates a post's title/description and replaces its tag set.
///
/// # Endpoint
///
/// `PUT /api/posts/{id}`
///
/// The supplied `tag_ids` become the post's entire tag set; omitting the
/// field clears all tags.
///
/// # Errors
///
/// Returns 404 if the post doesn't exist (nothing is written in that case).
/// Returns 400 if validation fails or a referenced tag does not exist.
pub async fn update_post_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostItem>, AppError> {
    payload.validate()?;

    let view = state
        .post_service
        .update_post(
            id,
            PostUpdate {
                title: payload.title,
                description: payload.description,
            },
            payload.tag_ids,
        )
        .await?;

    Ok(Json(PostItem::from(view)))
}

/// Deletes a post and all of its tag links.
///
/// # Endpoint
///
/// `DELETE /api/posts/{id}`
///
/// # Errors
///
/// Returns 404 if the post doesn't exist.
pub async fn delete_post_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.post_service.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

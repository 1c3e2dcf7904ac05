//! DTOs for post management.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::tag::TagItem;
use crate::domain::entities::PostView;

/// Request to create a post.
///
/// `tag_ids` is order-preserving and not deduplicated: repeating a tag id
/// links the tag to the post twice.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(range(min = 1, message = "user_id must identify an existing user"))]
    pub user_id: i64,

    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: String,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Request to update a post.
///
/// `tag_ids` fully replaces the post's link set; it is not merged with the
/// existing tags.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: String,

    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// JSON representation of the aggregate post view.
///
/// Create, update, and list all return this same shape.
#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<TagItem>,
}

impl From<PostView> for PostItem {
    fn from(view: PostView) -> Self {
        Self {
            id: view.id,
            user_id: view.user_id,
            title: view.title,
            description: view.description,
            tags: view
                .tags
                .into_iter()
                .map(|tag| TagItem {
                    id: tag.id,
                    name: tag.name,
                })
                .collect(),
        }
    }
}

/// Response containing list of post views.
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub items: Vec<PostItem>,
}

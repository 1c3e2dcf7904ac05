//! DTOs for tag management.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
}

/// Request to rename a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTagRequest {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
}

/// Individual tag information.
#[derive(Debug, Serialize)]
pub struct TagItem {
    pub id: i64,
    pub name: String,
}

/// Response containing list of tags.
#[derive(Debug, Serialize)]
pub struct TagListResponse {
    pub items: Vec<TagItem>,
}

//! DTOs for user management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "full_name cannot be empty"))]
    pub full_name: String,
}

/// Request to rename a user.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "full_name cannot be empty"))]
    pub full_name: String,
}

/// Individual user information.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Response containing list of users.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<UserItem>,
}

//! Post entity and its write/read companions.

use chrono::{DateTime, Utc};

use crate::domain::entities::Tag;

/// A user-authored content item as stored by the post store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new post.
///
/// `user_id` must identify an existing user; this is a caller precondition
/// enforced at the HTTP boundary (and by the foreign key), not re-checked by
/// the orchestration service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub description: String,
}

/// Update payload for an existing post. Both fields are always replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: String,
    pub description: String,
}

/// The read-time aggregate of a post and its resolved tag list.
///
/// Built per request, never persisted. Tag order follows link insertion
/// order, so it preserves the order and multiplicity of the tag-id sequence
/// supplied to the most recent create/update.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl PostView {
    /// Assembles the aggregate view from a stored post and its resolved tags.
    pub fn from_parts(post: Post, tags: Vec<Tag>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            description: post.description,
            tags,
        }
    }
}

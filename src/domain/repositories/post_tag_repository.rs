//! Repository trait for post-tag link data access.

use crate::domain::entities::{NewPostTagLink, PostTagLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing post-tag links.
///
/// Links are only ever created one at a time and deleted in bulk per post;
/// the orchestration service never updates an individual link.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostTagRepository: Send + Sync {
    /// Creates a new post-tag link.
    ///
    /// Duplicate `(post_id, tag_id)` pairs are allowed and produce distinct
    /// link rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the post or tag does not exist
    /// (foreign key violation). Returns [`AppError::Internal`] on database
    /// errors.
    async fn create(&self, new_link: NewPostTagLink) -> Result<PostTagLink, AppError>;

    /// Deletes every link belonging to the given post.
    ///
    /// Succeeds as a no-op when the post has no links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_post_id(&self, post_id: i64) -> Result<(), AppError>;
}

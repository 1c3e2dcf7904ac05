//! Repository trait for post data access.

use crate::domain::entities::{NewPost, Post, PostUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing posts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_id` violates the user
    /// foreign key. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a post by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Post))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists all posts, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Post>, AppError>;

    /// Replaces a post's title and description, returning the full updated row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: PostUpdate) -> Result<Post, AppError>;

    /// Deletes a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

//! Repository trait for tag data access.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing tags.
///
/// Besides plain CRUD this trait carries the per-post tag lookup consumed by
/// the post orchestration service when assembling read views.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Creates a new tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, name: String) -> Result<Tag, AppError>;

    /// Finds a tag by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Tag))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>, AppError>;

    /// Lists all tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;

    /// Returns the tags linked to a post, in link insertion order.
    ///
    /// A tag linked to the post more than once appears once per link, so the
    /// result preserves the multiplicity of the requested tag-id sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Tag>, AppError>;

    /// Renames a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tag matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, name: String) -> Result<Tag, AppError>;

    /// Deletes a tag by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no tag matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

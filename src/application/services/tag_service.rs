//! Tag CRUD service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// Service for managing tags.
///
/// Mirrors [`crate::application::services::UserService`]: plain CRUD with a
/// fetch-first existence gate on update and delete.
pub struct TagService<R: TagRepository> {
    repository: Arc<R>,
}

impl<R: TagRepository> TagService<R> {
    /// Creates a new tag service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_tag(&self, name: String) -> Result<Tag, AppError> {
        self.repository.create(name).await
    }

    /// Lists all tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.repository.list().await
    }

    /// Renames a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist; no write is
    /// performed in that case.
    pub async fn update_tag(&self, id: i64, name: String) -> Result<Tag, AppError> {
        self.get_existing_tag(id).await?;
        self.repository.update(id, name).await
    }

    /// Deletes a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tag does not exist; no write is
    /// performed in that case. Returns [`AppError::Validation`] if the tag is
    /// still linked to posts (foreign key).
    pub async fn delete_tag(&self, id: i64) -> Result<(), AppError> {
        self.get_existing_tag(id).await?;
        self.repository.delete(id).await
    }

    async fn get_existing_tag(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Tag not found", json!({ "id": id })))
    }
}

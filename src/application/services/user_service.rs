//! User CRUD service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for managing users.
///
/// Update and delete gate on a fetch-first existence check so a missing user
/// surfaces as [`AppError::NotFound`] before any mutation is issued.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, full_name: String) -> Result<User, AppError> {
        self.repository.create(full_name).await
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Renames a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; no write is
    /// performed in that case.
    pub async fn update_user(&self, id: i64, full_name: String) -> Result<User, AppError> {
        self.get_existing_user(id).await?;
        self.repository.update(id, full_name).await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; no write is
    /// performed in that case. Returns [`AppError::Validation`] if the user
    /// still owns posts (foreign key).
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.get_existing_user(id).await?;
        self.repository.delete(id).await
    }

    async fn get_existing_user(&self, id: i64) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn test_user(id: i64, full_name: &str) -> User {
        User {
            id,
            full_name: full_name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|name| name == "Giri Putra")
            .times(1)
            .returning(|name| Ok(test_user(1, &name)));

        let service = UserService::new(Arc::new(repo));

        let user = service.create_user("Giri Putra".to_string()).await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, "Giri Putra");
    }

    #[tokio::test]
    async fn test_update_user_missing_performs_zero_writes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update().times(0);

        let service = UserService::new(Arc::new(repo));

        let result = service.update_user(9, "New Name".to_string()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_user_checks_existence_first() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(test_user(1, "Giri Putra"))));
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repo));

        assert!(service.delete_user(1).await.is_ok());
    }
}

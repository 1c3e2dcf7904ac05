//! Shared application state wiring repositories into services.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{PostService, TagService, UserService};
use crate::infrastructure::persistence::{
    PgPostRepository, PgPostTagRepository, PgTagRepository, PgUserRepository,
};

/// Application state shared across all HTTP handlers.
///
/// Construction is the single dependency-wiring point: concrete Postgres
/// repositories are injected into the services here, so services stay
/// generic over their repository traits.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub tag_service: Arc<TagService<PgTagRepository>>,
    pub post_service: Arc<PostService<PgPostRepository, PgTagRepository, PgPostTagRepository>>,
}

impl AppState {
    /// Wires Postgres-backed repositories and services over the given pool.
    pub fn new(db: Arc<PgPool>) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(db.clone()));
        let tag_repository = Arc::new(PgTagRepository::new(db.clone()));
        let post_repository = Arc::new(PgPostRepository::new(db.clone()));
        let post_tag_repository = Arc::new(PgPostTagRepository::new(db.clone()));

        let user_service = Arc::new(UserService::new(user_repository));
        let tag_service = Arc::new(TagService::new(tag_repository.clone()));
        let post_service = Arc::new(PostService::new(
            post_repository,
            tag_repository,
            post_tag_repository,
        ));

        Self {
            db,
            user_service,
            tag_service,
            post_service,
        }
    }
}

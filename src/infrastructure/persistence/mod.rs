//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound prepared statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgTagRepository`] - Tag storage and per-post tag lookups
//! - [`PgPostRepository`] - Post storage
//! - [`PgPostTagRepository`] - Post-tag link storage

pub mod pg_post_repository;
pub mod pg_post_tag_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_post_repository::PgPostRepository;
pub use pg_post_tag_repository::PgPostTagRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;

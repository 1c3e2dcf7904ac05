//! Storage contracts, one trait per table: [`UserRepository`],
//! [`TagRepository`] (CRUD plus per-post lookups), [`PostRepository`], and
//! [`PostTagRepository`] (link creation and bulk deletion). Implementations
//! live in `crate::infrastructure::persistence`; `mockall` generates the test
//! doubles.

pub mod post_repository;
pub mod post_tag_repository;
pub mod tag_repository;
pub mod user_repository;

pub use post_repository::PostRepository;
pub use post_tag_repository::PostTagRepository;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use post_tag_repository::MockPostTagRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

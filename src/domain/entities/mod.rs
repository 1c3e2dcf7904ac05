//! The data model: [`User`], [`Tag`], [`Post`], the [`PostTagLink`] join
//! record, and the read-time [`PostView`] aggregate. Write payloads use
//! separate structs (`NewPost`, `PostUpdate`) so store-assigned fields never
//! appear in write paths.

pub mod post;
pub mod post_tag;
pub mod tag;
pub mod user;

pub use post::{NewPost, Post, PostUpdate, PostView};
pub use post_tag::{NewPostTagLink, PostTagLink};
pub use tag::Tag;
pub use user::User;

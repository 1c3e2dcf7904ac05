//! HTTP request handlers, one module per resource.

pub mod health;
pub mod posts;
pub mod tags;
pub mod users;

pub use health::health_handler;
pub use posts::{create_post_handler, delete_post_handler, post_list_handler, update_post_handler};
pub use tags::{create_tag_handler, delete_tag_handler, tag_list_handler, update_tag_handler};
pub use users::{create_user_handler, delete_user_handler, update_user_handler, user_list_handler};

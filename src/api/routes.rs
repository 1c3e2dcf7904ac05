//! API route configuration.

use crate::api::handlers::{
    create_post_handler, create_tag_handler, create_user_handler, delete_post_handler,
    delete_tag_handler, delete_user_handler, post_list_handler, tag_list_handler,
    update_post_handler, update_tag_handler, update_user_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /users`        - List users
/// - `POST   /users`        - Create a user
/// - `PUT    /users/{id}`   - Rename a user
/// - `DELETE /users/{id}`   - Delete a user
/// - `GET    /tags`         - List tags
/// - `POST   /tags`         - Create a tag
/// - `PUT    /tags/{id}`    - Rename a tag
/// - `DELETE /tags/{id}`    - Delete a tag
/// - `GET    /posts`        - List posts with their tags
/// - `POST   /posts`        - Create a post with tag links
/// - `PUT    /posts/{id}`   - Update a post, replacing its tag set
/// - `DELETE /posts/{id}`   - Delete a post and its tag links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            put(update_user_handler).delete(delete_user_handler),
        )
        .route("/tags", get(tag_list_handler).post(create_tag_handler))
        .route(
            "/tags/{id}",
            put(update_tag_handler).delete(delete_tag_handler),
        )
        .route("/posts", get(post_list_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            put(update_post_handler).delete(delete_post_handler),
        )
}

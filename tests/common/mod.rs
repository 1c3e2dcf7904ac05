#![allow(dead_code)]

use social_media::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_user(pool: &PgPool, full_name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (full_name) VALUES ($1) RETURNING id")
        .bind(full_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_tag(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO tags (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_post(pool: &PgPool, user_id: i64, title: &str, description: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO posts (user_id, title, description) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_tag(pool: &PgPool, post_id: i64, tag_id: i64) {
    sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)")
        .bind(post_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool, post_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_posts(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .unwrap()
}

mod common;

use axum::{
    Router,
    routing::{get, put},
};
use axum_test::TestServer;
use serde_json::json;
use social_media::api::handlers::{
    create_post_handler, delete_post_handler, post_list_handler, update_post_handler,
};
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/posts", get(post_list_handler).post(create_post_handler))
        .route(
            "/api/posts/{id}",
            put(update_post_handler).delete(delete_post_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_post_without_tags(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "user_id": user_id,
            "title": "Holiday in maldives",
            "description": "Yeah yeah yeah",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["title"], "Holiday in maldives");
    assert_eq!(body["description"], "Yeah yeah yeah");
    assert_eq!(body["tags"], json!([]));
}

#[sqlx::test]
async fn test_create_post_links_tags_in_order(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;
    let reading = common::create_test_tag(&pool, "reading").await;
    let shopping = common::create_test_tag(&pool, "shopping").await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "user_id": user_id,
            "title": "holiday yay",
            "description": "Yes Holiday",
            "tag_ids": [shopping, holiday, reading],
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let names: Vec<&str> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["shopping", "holiday", "reading"]);
}

#[sqlx::test]
async fn test_create_post_preserves_duplicate_tags(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;
    let reading = common::create_test_tag(&pool, "reading").await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "user_id": user_id,
            "title": "t",
            "description": "d",
            "tag_ids": [reading, holiday, reading],
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let ids: Vec<i64> = body["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![reading, holiday, reading]);
}

#[sqlx::test]
async fn test_create_post_unknown_tag_is_rejected(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "user_id": user_id,
            "title": "t",
            "description": "d",
            "tag_ids": [999_999],
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    // Fail-fast without compensation: the post row itself stays persisted.
    assert_eq!(common::count_posts(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_post_empty_title_is_rejected(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "user_id": user_id,
            "title": "",
            "description": "d",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_posts(&pool).await, 0);
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_posts_list_newest_first_with_own_tags(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;
    let reading = common::create_test_tag(&pool, "reading").await;
    let shopping = common::create_test_tag(&pool, "shopping").await;

    let first = common::create_test_post(&pool, user_id, "first", "d1").await;
    let second = common::create_test_post(&pool, user_id, "second", "d2").await;
    common::link_tag(&pool, first, holiday).await;
    common::link_tag(&pool, first, reading).await;
    common::link_tag(&pool, second, reading).await;
    common::link_tag(&pool, second, shopping).await;

    let response = server.get("/api/posts").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    // Most recently created first, each with its own tags.
    assert_eq!(items[0]["title"], "second");
    let second_tags: Vec<&str> = items[0]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(second_tags, vec!["reading", "shopping"]);

    assert_eq!(items[1]["title"], "first");
    let first_tags: Vec<&str> = items[1]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(first_tags, vec!["holiday", "reading"]);
}

#[sqlx::test]
async fn test_posts_list_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/posts").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["items"], json!([]));
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_post_replaces_tag_set(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;
    let reading = common::create_test_tag(&pool, "reading").await;
    let shopping = common::create_test_tag(&pool, "shopping").await;

    let post_id = common::create_test_post(&pool, user_id, "old", "old d").await;
    common::link_tag(&pool, post_id, holiday).await;
    common::link_tag(&pool, post_id, reading).await;

    let response = server
        .put(&format!("/api/posts/{post_id}"))
        .json(&json!({
            "title": "new",
            "description": "new d",
            "tag_ids": [shopping],
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    // Standardized shape: update responses carry id and user_id too.
    assert_eq!(body["id"], post_id);
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["title"], "new");

    // Exactly the new set, never a union or remainder of the old one.
    let list = server.get("/api/posts").await.json::<serde_json::Value>();
    let tags: Vec<&str> = list["items"][0]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["shopping"]);
    assert_eq!(common::count_links(&pool, post_id).await, 1);
}

#[sqlx::test]
async fn test_update_post_to_empty_tags(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;

    let post_id = common::create_test_post(&pool, user_id, "old", "old d").await;
    common::link_tag(&pool, post_id, holiday).await;

    let response = server
        .put(&format!("/api/posts/{post_id}"))
        .json(&json!({
            "title": "new",
            "description": "new d",
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["tags"], json!([]));
    assert_eq!(common::count_links(&pool, post_id).await, 0);
}

#[sqlx::test]
async fn test_update_missing_post_returns_not_found(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .put("/api/posts/999999")
        .json(&json!({
            "title": "t",
            "description": "d",
            "tag_ids": [1],
        }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_post_removes_links_and_post(pool: PgPool) {
    let server = make_server(pool.clone());
    let user_id = common::create_test_user(&pool, "Giri Putra").await;
    let holiday = common::create_test_tag(&pool, "holiday").await;

    let post_id = common::create_test_post(&pool, user_id, "t", "d").await;
    common::link_tag(&pool, post_id, holiday).await;

    let response = server.delete(&format!("/api/posts/{post_id}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(common::count_links(&pool, post_id).await, 0);
    assert_eq!(common::count_posts(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_missing_post_returns_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.delete("/api/posts/999999").await;

    response.assert_status_not_found();
}

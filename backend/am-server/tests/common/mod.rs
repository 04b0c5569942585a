#![allow(dead_code)]

use am_config::ApiConfig;
use am_server::AppState;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    am_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a test AppState with the default system user configuration
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(pool, ApiConfig::default())
}

/// Inserts a user that modifications can be credited to
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> Uuid {
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, name) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(format!("{}@example.com", user_id))
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test user");
    user_id
}

/// Makes every insert into the modification log fail
pub async fn break_modification_log(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TRIGGER fail_modification_log BEFORE INSERT ON modification_records \
         BEGIN SELECT RAISE(ABORT, 'modification log unavailable'); END",
    )
    .execute(pool)
    .await
    .expect("Failed to install failing trigger");
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_request_as(
    method: &str,
    uri: &str,
    user_id: Uuid,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("X-User-Id", user_id.to_string())
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

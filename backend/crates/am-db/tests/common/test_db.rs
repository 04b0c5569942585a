#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
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

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a file-backed WAL pool with several connections, set up like the
/// server's, so that writers can actually contend
pub async fn create_file_test_pool(path: &Path, busy_timeout: Duration) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create file-backed test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user that modifications can be credited to
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid, name: &str) {
    sqlx::query("INSERT INTO users (id, email, name) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(format!("{}@example.com", user_id))
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// Makes every insert into the modification log fail, as a full disk or a
/// broken log table would
pub async fn break_modification_log(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TRIGGER fail_modification_log BEFORE INSERT ON modification_records \
         BEGIN SELECT RAISE(ABORT, 'modification log unavailable'); END",
    )
    .execute(pool)
    .await
    .expect("Failed to install failing trigger");
}

pub async fn count_modification_records(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM modification_records")
        .fetch_one(pool)
        .await
        .expect("Failed to count modification records")
}

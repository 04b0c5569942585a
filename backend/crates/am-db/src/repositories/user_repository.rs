use crate::repositories::row_decode::{timestamp_column, uuid_column};
use crate::Result as DbErrorResult;

use am_core::User;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("INSERT INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.created_at.timestamp_millis())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT id, email, name, created_at FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(|r| user_from_row(&r)).transpose()
    }

    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query("SELECT id, email, name, created_at FROM users ORDER BY email")
            .fetch_all(executor)
            .await?;

        rows.iter().map(user_from_row).collect()
    }

    pub async fn exists<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        Ok(found.is_some())
    }

    /// Insert the user unless one with the same id already exists. Returns
    /// true when a row was created.
    pub async fn ensure_exists<'e, E>(executor: E, user: &User) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO users (id, email, name, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: uuid_column(row, "id")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        created_at: timestamp_column(row, "created_at")?,
    })
}

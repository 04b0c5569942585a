use crate::repositories::row_decode::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use am_core::{EntityType, ModificationRecord, ModificationRecordView};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use uuid::Uuid;

const SELECT_VIEW: &str = r#"
    SELECT m.id, m.entity_type, m.entity_id, m.user_id,
           m.field_name, m.old_value, m.new_value, m.modified_at,
           u.name AS user_name, u.email AS user_email
    FROM modification_records m
    LEFT JOIN users u ON u.id = m.user_id
"#;

pub struct ModificationLogRepository;

impl ModificationLogRepository {
    /// Insert a batch of records with one multi-row INSERT. An empty batch
    /// does not touch the database.
    pub async fn write_batch<'e, E>(
        executor: E,
        records: &[ModificationRecord],
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        if records.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO modification_records (\
                id, entity_type, entity_id, user_id, \
                field_name, old_value, new_value, modified_at\
            ) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.id.to_string())
                .push_bind(record.entity_type.as_str())
                .push_bind(record.entity_id.to_string())
                .push_bind(record.user_id.to_string())
                .push_bind(record.field_name.clone())
                .push_bind(record.old_value.clone())
                .push_bind(record.new_value.clone())
                .push_bind(record.modified_at.timestamp_millis());
        });

        let result = builder.build().execute(executor).await?;

        Ok(result.rows_affected())
    }

    /// Every record of an entity type, newest first. Records sharing a
    /// timestamp keep their insertion order.
    pub async fn find_by_entity_type<'e, E>(
        executor: E,
        entity_type: EntityType,
    ) -> DbErrorResult<Vec<ModificationRecordView>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{} WHERE m.entity_type = ? ORDER BY m.modified_at DESC, m.rowid ASC",
            SELECT_VIEW
        );

        let rows = sqlx::query(&sql)
            .bind(entity_type.as_str())
            .fetch_all(executor)
            .await?;

        rows.iter().map(view_from_row).collect()
    }

    pub async fn find_by_entity<'e, E>(
        executor: E,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> DbErrorResult<Vec<ModificationRecordView>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "{} WHERE m.entity_type = ? AND m.entity_id = ? \
             ORDER BY m.modified_at DESC, m.rowid ASC",
            SELECT_VIEW
        );

        let rows = sqlx::query(&sql)
            .bind(entity_type.as_str())
            .bind(entity_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(view_from_row).collect()
    }

    /// Remove every record of one entity type. Returns the number deleted.
    pub async fn delete_by_entity_type<'e, E>(
        executor: E,
        entity_type: EntityType,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM modification_records WHERE entity_type = ?")
            .bind(entity_type.as_str())
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}

fn view_from_row(row: &SqliteRow) -> DbErrorResult<ModificationRecordView> {
    let entity_type: String = row.try_get("entity_type")?;

    let record = ModificationRecord {
        id: uuid_column(row, "id")?,
        entity_type: EntityType::from_str(&entity_type).map_err(|e| {
            DbError::corrupt_row(format!(
                "Invalid EntityType in modification_records.entity_type: {}",
                e
            ))
        })?,
        entity_id: uuid_column(row, "entity_id")?,
        user_id: uuid_column(row, "user_id")?,
        field_name: row.try_get("field_name")?,
        old_value: row.try_get("old_value")?,
        new_value: row.try_get("new_value")?,
        modified_at: timestamp_column(row, "modified_at")?,
    };

    Ok(ModificationRecordView {
        record,
        user_name: row.try_get("user_name")?,
        user_email: row.try_get("user_email")?,
    })
}

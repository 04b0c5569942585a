//! Generic persistence for tracked entities.
//!
//! Column lists are taken from the entity's [`EntitySchema`], so one
//! implementation serves every entity type.

use crate::repositories::row_decode::{timestamp_column, uuid_column};
use crate::{DbError, Result as DbErrorResult};

use am_core::{DATE_FORMAT, EntityMetadata, EntitySchema, FieldKind, FieldValue, TrackedEntity};

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use uuid::Uuid;

const METADATA_COLUMNS: &str = "id, version, created_at, updated_at";

pub struct EntityRepository;

impl EntityRepository {
    pub async fn create<'e, T, E>(executor: E, entity: &T) -> DbErrorResult<()>
    where
        T: TrackedEntity,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let schema = T::schema();
        let metadata = entity.metadata();
        let mut snapshot = entity.snapshot();

        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "INSERT INTO {} ({}",
            schema.table, METADATA_COLUMNS
        ));
        for spec in schema.fields {
            builder.push(", ").push(spec.name);
        }

        builder
            .push(") VALUES (")
            .push_bind(metadata.id.to_string())
            .push(", ")
            .push_bind(metadata.version)
            .push(", ")
            .push_bind(metadata.created_at.timestamp_millis())
            .push(", ")
            .push_bind(metadata.updated_at.timestamp_millis());
        for spec in schema.fields {
            builder.push(", ");
            push_field_value(
                &mut builder,
                snapshot.remove(spec.name).unwrap_or(FieldValue::Null),
            );
        }
        builder.push(")");

        builder.build().execute(executor).await?;

        Ok(())
    }

    pub async fn find_by_id<'e, T, E>(executor: E, id: Uuid) -> DbErrorResult<Option<T>>
    where
        T: TrackedEntity,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let schema = T::schema();
        let sql = format!("{} WHERE id = ?", select_clause(schema));

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.map(|r| entity_from_row::<T>(&r)).transpose()
    }

    /// All rows of the entity type, most recently created first
    pub async fn find_all<'e, T, E>(executor: E) -> DbErrorResult<Vec<T>>
    where
        T: TrackedEntity,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let schema = T::schema();
        let sql = format!(
            "{} ORDER BY created_at DESC, rowid DESC",
            select_clause(schema)
        );

        let rows = sqlx::query(&sql).fetch_all(executor).await?;

        rows.iter().map(entity_from_row::<T>).collect()
    }

    /// Write every column of `entity` if the stored row is still at
    /// `expected_version`. Returns false when no row matched, i.e. the entity
    /// is gone or another writer bumped its version first.
    pub async fn update<'e, T, E>(
        executor: E,
        entity: &T,
        expected_version: i64,
    ) -> DbErrorResult<bool>
    where
        T: TrackedEntity,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let schema = T::schema();
        let metadata = entity.metadata();
        let mut snapshot = entity.snapshot();

        let mut builder = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET version = ", schema.table));
        builder
            .push_bind(metadata.version)
            .push(", updated_at = ")
            .push_bind(metadata.updated_at.timestamp_millis());
        for spec in schema.fields {
            builder.push(", ").push(spec.name).push(" = ");
            push_field_value(
                &mut builder,
                snapshot.remove(spec.name).unwrap_or(FieldValue::Null),
            );
        }
        builder
            .push(" WHERE id = ")
            .push_bind(metadata.id.to_string())
            .push(" AND version = ")
            .push_bind(expected_version);

        let result = builder.build().execute(executor).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no row had this id.
    pub async fn delete<'e, T, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        T: TrackedEntity,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::schema().table);

        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn select_clause(schema: &EntitySchema) -> String {
    let mut columns = String::from(METADATA_COLUMNS);
    for spec in schema.fields {
        columns.push_str(", ");
        columns.push_str(spec.name);
    }
    format!("SELECT {} FROM {}", columns, schema.table)
}

fn push_field_value(builder: &mut QueryBuilder<'_, Sqlite>, value: FieldValue) {
    match value {
        FieldValue::Null => builder.push_bind(None::<String>),
        FieldValue::Text(text) => builder.push_bind(text),
        FieldValue::Date(date) => builder.push_bind(date.format(DATE_FORMAT).to_string()),
        FieldValue::Number(number) => builder.push_bind(number),
    };
}

fn entity_from_row<T: TrackedEntity>(row: &SqliteRow) -> DbErrorResult<T> {
    let schema = T::schema();

    let metadata = EntityMetadata {
        id: uuid_column(row, "id")?,
        version: row.try_get("version")?,
        created_at: timestamp_column(row, "created_at")?,
        updated_at: timestamp_column(row, "updated_at")?,
    };

    let mut fields = Vec::with_capacity(schema.fields.len());
    for spec in schema.fields {
        let value = match spec.kind {
            FieldKind::Text => FieldValue::from_text(&row.try_get(spec.name)?),
            FieldKind::Number => FieldValue::from_number(row.try_get(spec.name)?),
            FieldKind::Date => {
                let raw: Option<String> = row.try_get(spec.name)?;
                match raw {
                    Some(raw) => FieldValue::Date(
                        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
                            DbError::corrupt_row(format!(
                                "Invalid date in {}.{}: {}",
                                schema.table, spec.name, e
                            ))
                        })?,
                    ),
                    None => FieldValue::Null,
                }
            }
        };
        fields.push((spec.name, value));
    }

    Ok(T::from_record(metadata, fields)?)
}

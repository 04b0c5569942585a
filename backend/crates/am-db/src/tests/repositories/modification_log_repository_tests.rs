use crate::{ModificationLogRepository, MIGRATOR};

use am_core::{EntityType, FieldDelta, ModificationRecord, current_timestamp};

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

async fn setup_db() -> (SqlitePool, Uuid) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    // Seed minimal user (FK)
    let user_id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, email, name) VALUES (?, 'test@example.com', 'Test User')")
        .bind(user_id.to_string())
        .execute(&pool)
        .await
        .expect("Failed to seed user");

    (pool, user_id)
}

fn delta(field: &str, old: Option<&str>, new: Option<&str>) -> FieldDelta {
    FieldDelta {
        field: field.to_string(),
        old_value: old.map(str::to_string),
        new_value: new.map(str::to_string),
    }
}

#[tokio::test]
async fn given_empty_batch_when_written_then_no_rows() {
    let (pool, _) = setup_db().await;

    let written = ModificationLogRepository::write_batch(&pool, &[])
        .await
        .unwrap();

    assert_eq!(written, 0);
}

#[tokio::test]
async fn given_batch_sharing_timestamp_when_listed_then_insertion_order_kept() {
    let (pool, user_id) = setup_db().await;
    let entity_id = Uuid::new_v4();
    let now = current_timestamp();

    let records: Vec<ModificationRecord> = [
        delta("statut", Some("ACTIF"), Some("REFORME")),
        delta("site", Some("Lyon"), Some("Paris")),
        delta("commentaire", None, Some("------")),
    ]
    .iter()
    .map(|d| ModificationRecord::from_delta(EntityType::Equipment, entity_id, user_id, d, now))
    .collect();

    let written = ModificationLogRepository::write_batch(&pool, &records)
        .await
        .unwrap();
    let listed = ModificationLogRepository::find_by_entity(&pool, EntityType::Equipment, entity_id)
        .await
        .unwrap();

    assert_eq!(written, 3);
    let fields: Vec<&str> = listed.iter().map(|v| v.record.field_name.as_str()).collect();
    assert_eq!(fields, ["statut", "site", "commentaire"]);
    assert_eq!(listed[0].record, records[0]);
    assert_eq!(listed[0].user_name.as_deref(), Some("Test User"));
    assert_eq!(listed[0].user_email.as_deref(), Some("test@example.com"));
}

use crate::{
    EQUIPMENT_SCHEMA, EntityPayload, EquipmentPayload, FieldValue, RawField, UNSET_SENTINEL,
    normalize, normalize_complete, normalize_value,
};
use crate::FieldKind;

use chrono::NaiveDate;
use googletest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> FieldValue {
    FieldValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// =========================================================================
// Empty input
// =========================================================================

#[test]
fn given_empty_text_field_when_normalized_then_sentinel() {
    let value = normalize_value("statut", &RawField::value(""), Some(FieldKind::Text));

    assert_that!(value, eq(&FieldValue::text(UNSET_SENTINEL)));
}

#[test]
fn given_null_text_field_when_normalized_then_sentinel() {
    let value = normalize_value("statut", &RawField::Null, Some(FieldKind::Text));

    assert_that!(value, eq(&FieldValue::text(UNSET_SENTINEL)));
}

#[test]
fn given_empty_date_field_when_normalized_then_null() {
    let value = normalize_value("date_achat", &RawField::value(""), Some(FieldKind::Date));

    assert_that!(value, eq(&FieldValue::Null));
}

#[test]
fn given_null_number_field_when_normalized_then_null() {
    let value = normalize_value("prix_achat", &RawField::Null, Some(FieldKind::Number));

    assert_that!(value, eq(&FieldValue::Null));
}

// =========================================================================
// Non-empty input
// =========================================================================

#[test]
fn given_text_value_when_normalized_then_passes_through_unchanged() {
    let value = normalize_value("site", &RawField::value("  Lyon "), Some(FieldKind::Text));

    assert_that!(value, eq(&FieldValue::text("  Lyon ")));
}

#[test]
fn given_iso_date_when_normalized_then_parsed() {
    let value = normalize_value(
        "date_achat",
        &RawField::value("2024-03-15"),
        Some(FieldKind::Date),
    );

    assert_that!(value, eq(&date(2024, 3, 15)));
}

#[test]
fn given_rfc3339_timestamp_when_normalized_then_date_part_kept() {
    let value = normalize_value(
        "date_achat",
        &RawField::value("2024-03-15T00:00:00.000Z"),
        Some(FieldKind::Date),
    );

    assert_that!(value, eq(&date(2024, 3, 15)));
}

#[test]
fn given_french_date_when_normalized_then_parsed() {
    let value = normalize_value(
        "date_achat",
        &RawField::value("15/03/2024"),
        Some(FieldKind::Date),
    );

    assert_that!(value, eq(&date(2024, 3, 15)));
}

#[test]
fn given_malformed_date_when_normalized_then_coerced_to_null() {
    let value = normalize_value(
        "date_achat",
        &RawField::value("next tuesday"),
        Some(FieldKind::Date),
    );

    assert_that!(value, eq(&FieldValue::Null));
}

#[test]
fn given_decimal_comma_when_normalized_then_parsed_as_number() {
    let value = normalize_value("prix_achat", &RawField::value("19,99"), Some(FieldKind::Number));

    assert_that!(value, eq(&FieldValue::Number(19.99)));
}

#[test]
fn given_non_finite_number_when_normalized_then_coerced_to_null() {
    let value = normalize_value("prix_achat", &RawField::value("NaN"), Some(FieldKind::Number));

    assert_that!(value, eq(&FieldValue::Null));
}

#[test]
fn given_bookkeeping_field_when_normalized_then_carried_as_text() {
    let value = normalize_value("created_at", &RawField::value("2024-01-01"), None);

    assert_that!(value, eq(&FieldValue::text("2024-01-01")));
}

// =========================================================================
// Whole payloads
// =========================================================================

#[test]
fn given_payload_when_normalized_then_absent_fields_skipped_in_declaration_order() {
    // Given
    let payload = EquipmentPayload {
        commentaire: RawField::Null,
        statut: RawField::value("REFORME"),
        date_achat: RawField::value(""),
        ..Default::default()
    };

    // When
    let normalized = normalize(payload.fields(), &EQUIPMENT_SCHEMA);

    // Then
    let fields: Vec<&str> = normalized.iter().map(|(name, _)| name).collect();
    assert_eq!(fields, vec!["statut", "date_achat", "commentaire"]);
    assert_that!(normalized.get("statut"), some(eq(&FieldValue::text("REFORME"))));
    assert_that!(normalized.get("date_achat"), some(eq(&FieldValue::Null)));
    assert_that!(
        normalized.get("commentaire"),
        some(eq(&FieldValue::text(UNSET_SENTINEL)))
    );
}

#[test]
fn given_partial_payload_when_normalized_complete_then_every_schema_field_present() {
    // Given
    let payload = EquipmentPayload {
        designation: RawField::value("Laptop"),
        ..Default::default()
    };

    // When
    let normalized = normalize_complete(payload.fields(), &EQUIPMENT_SCHEMA);

    // Then
    assert_that!(normalized.len(), eq(EQUIPMENT_SCHEMA.fields.len()));
    assert_that!(normalized.get("designation"), some(eq(&FieldValue::text("Laptop"))));
    assert_that!(normalized.get("marque"), some(eq(&FieldValue::text(UNSET_SENTINEL))));
    assert_that!(normalized.get("date_achat"), some(eq(&FieldValue::Null)));
    assert!(normalized.get("id").is_none());
}

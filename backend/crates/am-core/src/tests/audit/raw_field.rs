use crate::{EquipmentPayload, RawField};

use googletest::prelude::*;

#[test]
fn given_missing_key_when_deserialized_then_field_is_absent() {
    // Given
    let json = r#"{ "statut": "ACTIF" }"#;

    // When
    let payload: EquipmentPayload = serde_json::from_str(json).unwrap();

    // Then
    assert_that!(payload.commentaire, eq(&RawField::Absent));
    assert_that!(payload.statut, eq(&RawField::value("ACTIF")));
}

#[test]
fn given_explicit_null_when_deserialized_then_field_is_null() {
    let payload: EquipmentPayload =
        serde_json::from_str(r#"{ "commentaire": null }"#).unwrap();

    assert_that!(payload.commentaire, eq(&RawField::Null));
}

#[test]
fn given_json_number_when_deserialized_then_kept_as_text() {
    let payload: EquipmentPayload = serde_json::from_str(r#"{ "prix_achat": 1250.5 }"#).unwrap();

    assert_that!(payload.prix_achat, eq(&RawField::value("1250.5")));
}

#[test]
fn given_expected_version_when_deserialized_then_available_to_caller() {
    let payload: EquipmentPayload =
        serde_json::from_str(r#"{ "expected_version": 4 }"#).unwrap();

    assert_that!(payload.expected_version, some(eq(4)));
}

#[test]
fn test_is_empty() {
    assert!(RawField::Absent.is_empty());
    assert!(RawField::Null.is_empty());
    assert!(RawField::value("").is_empty());
    assert!(!RawField::value(" ").is_empty());
    assert!(!RawField::value("x").is_empty());
}

#![allow(dead_code)]

use am_core::{
    EntityType, EquipmentPayload, FieldDelta, ModificationRecord, PhoneLinePayload, RawField,
    TelecomPackPayload, current_timestamp,
};

use chrono::Duration;
use uuid::Uuid;

/// An equipment in service at the Lyon site
pub fn active_equipment_payload() -> EquipmentPayload {
    EquipmentPayload {
        designation: RawField::value("Laptop 14\""),
        marque: RawField::value("Dell"),
        statut: RawField::value("ACTIF"),
        site: RawField::value("Lyon"),
        date_achat: RawField::value("2023-03-15"),
        prix_achat: RawField::value("1249.90"),
        commentaire: RawField::Null,
        ..Default::default()
    }
}

pub fn telecom_pack_payload() -> TelecomPackPayload {
    TelecomPackPayload {
        operateur: RawField::value("Orange"),
        libelle: RawField::value("Flotte mobile"),
        statut: RawField::value("ACTIF"),
        cout_mensuel: RawField::value("39.90"),
        ..Default::default()
    }
}

pub fn phone_line_payload() -> PhoneLinePayload {
    PhoneLinePayload {
        numero: RawField::value("0102030405"),
        operateur: RawField::value("SFR"),
        statut: RawField::value("ACTIF"),
        ..Default::default()
    }
}

/// A modification record stamped `seconds_offset` seconds from now
pub fn create_modification_record_at(
    entity_type: EntityType,
    entity_id: Uuid,
    user_id: Uuid,
    field: &str,
    seconds_offset: i64,
) -> ModificationRecord {
    let delta = FieldDelta {
        field: field.to_string(),
        old_value: Some("old".to_string()),
        new_value: Some("new".to_string()),
    };
    ModificationRecord::from_delta(
        entity_type,
        entity_id,
        user_id,
        &delta,
        current_timestamp() + Duration::seconds(seconds_offset),
    )
}

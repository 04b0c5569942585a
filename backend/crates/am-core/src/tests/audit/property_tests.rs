use crate::{
    BOOKKEEPING_FIELDS, EQUIPMENT_SCHEMA, EntityMetadata, EntityPayload, Equipment,
    EquipmentPayload, FieldValue, RawField, TrackedEntity, UNSET_SENTINEL, detect_changes,
    normalize,
};

use chrono::NaiveDate;
use proptest::prelude::*;

fn raw_field() -> impl Strategy<Value = RawField> {
    prop_oneof![
        Just(RawField::Absent),
        Just(RawField::Null),
        Just(RawField::value("")),
        Just(RawField::value(UNSET_SENTINEL)),
        "[A-Za-z0-9 ]{1,20}".prop_map(RawField::Value),
        "20[0-9]{2}-0[1-9]-[0-2][1-8]".prop_map(RawField::Value),
        (0u32..100_000, 0u32..100).prop_map(|(a, b)| RawField::Value(format!("{a}.{b}"))),
    ]
}

prop_compose! {
    fn equipment_payload()(
        designation in raw_field(),
        statut in raw_field(),
        site in raw_field(),
        date_achat in raw_field(),
        date_fin_garantie in raw_field(),
        prix_achat in raw_field(),
        commentaire in raw_field(),
        updated_at in raw_field(),
    ) -> EquipmentPayload {
        EquipmentPayload {
            designation,
            statut,
            site,
            date_achat,
            date_fin_garantie,
            prix_achat,
            commentaire,
            updated_at,
            ..Default::default()
        }
    }
}

prop_compose! {
    /// Equipment whose text fields always hold a value, i.e. the shape rows
    /// have once every write has gone through the normalizer
    fn stored_equipment()(
        designation in "[A-Za-z ]{1,12}",
        statut in prop_oneof![Just("ACTIF".to_string()), Just(UNSET_SENTINEL.to_string())],
        site in "[A-Za-z]{1,12}",
        date_achat in proptest::option::of((2000i32..2030, 1u32..13, 1u32..29)),
        prix_achat in proptest::option::of(0u32..10_000),
    ) -> Equipment {
        let mut equipment = Equipment::blank(EntityMetadata::new());
        equipment.designation = Some(designation);
        equipment.marque = Some(UNSET_SENTINEL.to_string());
        equipment.modele = Some(UNSET_SENTINEL.to_string());
        equipment.numero_serie = Some(UNSET_SENTINEL.to_string());
        equipment.categorie = Some(UNSET_SENTINEL.to_string());
        equipment.statut = Some(statut);
        equipment.utilisateur = Some(UNSET_SENTINEL.to_string());
        equipment.site = Some(site);
        equipment.date_achat = date_achat.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        equipment.prix_achat = prix_achat.map(f64::from);
        equipment.commentaire = Some(UNSET_SENTINEL.to_string());
        equipment
    }
}

proptest! {
    #[test]
    fn given_any_payload_when_normalized_twice_then_same_as_once(payload in equipment_payload()) {
        let once = normalize(payload.fields(), &EQUIPMENT_SCHEMA);
        let raw_again = once.to_raw();
        let twice = normalize(raw_again.iter().map(|(name, raw)| (*name, raw)), &EQUIPMENT_SCHEMA);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn given_stored_entity_when_diffed_against_itself_then_no_delta(equipment in stored_equipment()) {
        let raw: Vec<(&'static str, RawField)> = EQUIPMENT_SCHEMA
            .fields
            .iter()
            .map(|spec| {
                let value = equipment.snapshot().remove(spec.name).unwrap_or(FieldValue::Null);
                (spec.name, value.to_raw())
            })
            .collect();
        let normalized = normalize(raw.iter().map(|(name, raw)| (*name, raw)), &EQUIPMENT_SCHEMA);

        let deltas = detect_changes(&equipment.snapshot(), &normalized, BOOKKEEPING_FIELDS);

        prop_assert!(deltas.is_empty(), "unexpected deltas: {:?}", deltas);
    }

    #[test]
    fn given_any_payload_when_diffed_then_delta_count_bounded_by_tracked_fields(
        equipment in stored_equipment(),
        payload in equipment_payload(),
    ) {
        let normalized = normalize(payload.fields(), &EQUIPMENT_SCHEMA);
        let tracked = normalized
            .iter()
            .filter(|(name, _)| !BOOKKEEPING_FIELDS.contains(name))
            .count();

        let deltas = detect_changes(&equipment.snapshot(), &normalized, BOOKKEEPING_FIELDS);

        prop_assert!(deltas.len() <= tracked);
        prop_assert!(deltas.iter().all(|d| !BOOKKEEPING_FIELDS.contains(&d.field.as_str())));
    }
}

use crate::{EntityPayload, RawField};

use serde::Deserialize;

/// Request body for creating or updating equipment
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EquipmentPayload {
    pub id: RawField,
    pub designation: RawField,
    pub marque: RawField,
    pub modele: RawField,
    pub numero_serie: RawField,
    pub categorie: RawField,
    pub statut: RawField,
    pub utilisateur: RawField,
    pub site: RawField,
    pub date_achat: RawField,
    pub date_fin_garantie: RawField,
    pub prix_achat: RawField,
    pub commentaire: RawField,
    pub version: RawField,
    pub created_at: RawField,
    pub updated_at: RawField,
    /// Optional: current version for optimistic locking
    pub expected_version: Option<i64>,
}

impl EntityPayload for EquipmentPayload {
    fn fields(&self) -> Vec<(&'static str, &RawField)> {
        vec![
            ("id", &self.id),
            ("designation", &self.designation),
            ("marque", &self.marque),
            ("modele", &self.modele),
            ("numero_serie", &self.numero_serie),
            ("categorie", &self.categorie),
            ("statut", &self.statut),
            ("utilisateur", &self.utilisateur),
            ("site", &self.site),
            ("date_achat", &self.date_achat),
            ("date_fin_garantie", &self.date_fin_garantie),
            ("prix_achat", &self.prix_achat),
            ("commentaire", &self.commentaire),
            ("version", &self.version),
            ("created_at", &self.created_at),
            ("updated_at", &self.updated_at),
        ]
    }

    fn expected_version(&self) -> Option<i64> {
        self.expected_version
    }
}

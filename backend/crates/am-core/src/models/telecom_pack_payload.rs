use crate::{EntityPayload, RawField};

use serde::Deserialize;

/// Request body for creating or updating a telecom pack
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TelecomPackPayload {
    pub id: RawField,
    pub operateur: RawField,
    pub reference_contrat: RawField,
    pub libelle: RawField,
    pub forfait: RawField,
    pub statut: RawField,
    pub date_debut: RawField,
    pub date_fin: RawField,
    pub cout_mensuel: RawField,
    pub commentaire: RawField,
    pub version: RawField,
    pub created_at: RawField,
    pub updated_at: RawField,
    pub expected_version: Option<i64>,
}

impl EntityPayload for TelecomPackPayload {
    fn fields(&self) -> Vec<(&'static str, &RawField)> {
        vec![
            ("id", &self.id),
            ("operateur", &self.operateur),
            ("reference_contrat", &self.reference_contrat),
            ("libelle", &self.libelle),
            ("forfait", &self.forfait),
            ("statut", &self.statut),
            ("date_debut", &self.date_debut),
            ("date_fin", &self.date_fin),
            ("cout_mensuel", &self.cout_mensuel),
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

use crate::{EntityPayload, RawField};

use serde::Deserialize;

/// Request body for creating or updating a phone line
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PhoneLinePayload {
    pub id: RawField,
    pub numero: RawField,
    pub operateur: RawField,
    pub type_ligne: RawField,
    pub titulaire: RawField,
    pub service: RawField,
    pub statut: RawField,
    pub date_activation: RawField,
    pub date_resiliation: RawField,
    pub cout_mensuel: RawField,
    pub commentaire: RawField,
    pub version: RawField,
    pub created_at: RawField,
    pub updated_at: RawField,
    pub expected_version: Option<i64>,
}

impl EntityPayload for PhoneLinePayload {
    fn fields(&self) -> Vec<(&'static str, &RawField)> {
        vec![
            ("id", &self.id),
            ("numero", &self.numero),
            ("operateur", &self.operateur),
            ("type_ligne", &self.type_ligne),
            ("titulaire", &self.titulaire),
            ("service", &self.service),
            ("statut", &self.statut),
            ("date_activation", &self.date_activation),
            ("date_resiliation", &self.date_resiliation),
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

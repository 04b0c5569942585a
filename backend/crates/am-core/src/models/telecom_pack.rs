use crate::{
    CoreError, EntityMetadata, EntitySchema, EntityType, FieldMap, FieldSpec, FieldValue,
    Result as CoreErrorResult, TelecomPackPayload, TrackedEntity,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub static TELECOM_PACK_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::TelecomPack,
    table: "telecom_packs",
    fields: &[
        FieldSpec::text("operateur"),
        FieldSpec::text("reference_contrat"),
        FieldSpec::text("libelle"),
        FieldSpec::text("forfait"),
        FieldSpec::text("statut"),
        FieldSpec::date("date_debut"),
        FieldSpec::date("date_fin"),
        FieldSpec::number("cout_mensuel"),
        FieldSpec::text("commentaire"),
    ],
};

/// A telecom subscription contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelecomPack {
    #[serde(flatten)]
    pub metadata: EntityMetadata,

    pub operateur: Option<String>,
    pub reference_contrat: Option<String>,
    pub libelle: Option<String>,
    pub forfait: Option<String>,
    pub statut: Option<String>,

    // Contract period
    pub date_debut: Option<NaiveDate>,
    pub date_fin: Option<NaiveDate>,
    pub cout_mensuel: Option<f64>,

    pub commentaire: Option<String>,
}

impl TrackedEntity for TelecomPack {
    type Payload = TelecomPackPayload;

    fn schema() -> &'static EntitySchema {
        &TELECOM_PACK_SCHEMA
    }

    fn blank(metadata: EntityMetadata) -> Self {
        Self {
            metadata,
            operateur: None,
            reference_contrat: None,
            libelle: None,
            forfait: None,
            statut: None,
            date_debut: None,
            date_fin: None,
            cout_mensuel: None,
            commentaire: None,
        }
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn snapshot(&self) -> FieldMap {
        FieldMap::from([
            ("operateur", FieldValue::from_text(&self.operateur)),
            (
                "reference_contrat",
                FieldValue::from_text(&self.reference_contrat),
            ),
            ("libelle", FieldValue::from_text(&self.libelle)),
            ("forfait", FieldValue::from_text(&self.forfait)),
            ("statut", FieldValue::from_text(&self.statut)),
            ("date_debut", FieldValue::from_date(self.date_debut)),
            ("date_fin", FieldValue::from_date(self.date_fin)),
            ("cout_mensuel", FieldValue::from_number(self.cout_mensuel)),
            ("commentaire", FieldValue::from_text(&self.commentaire)),
        ])
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> CoreErrorResult<()> {
        match field {
            "operateur" => self.operateur = value.into_text(field)?,
            "reference_contrat" => self.reference_contrat = value.into_text(field)?,
            "libelle" => self.libelle = value.into_text(field)?,
            "forfait" => self.forfait = value.into_text(field)?,
            "statut" => self.statut = value.into_text(field)?,
            "date_debut" => self.date_debut = value.into_date(field)?,
            "date_fin" => self.date_fin = value.into_date(field)?,
            "cout_mensuel" => self.cout_mensuel = value.into_number(field)?,
            "commentaire" => self.commentaire = value.into_text(field)?,
            _ => {
                return Err(CoreError::unknown_field(
                    EntityType::TelecomPack.as_str(),
                    field,
                ));
            }
        }
        Ok(())
    }
}

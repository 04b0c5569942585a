use crate::{
    CoreError, EntityMetadata, EntitySchema, EntityType, EquipmentPayload, FieldMap, FieldSpec,
    FieldValue, Result as CoreErrorResult, TrackedEntity,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub static EQUIPMENT_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::Equipment,
    table: "equipments",
    fields: &[
        FieldSpec::text("designation"),
        FieldSpec::text("marque"),
        FieldSpec::text("modele"),
        FieldSpec::text("numero_serie"),
        FieldSpec::text("categorie"),
        FieldSpec::text("statut"),
        FieldSpec::text("utilisateur"),
        FieldSpec::text("site"),
        FieldSpec::date("date_achat"),
        FieldSpec::date("date_fin_garantie"),
        FieldSpec::number("prix_achat"),
        FieldSpec::text("commentaire"),
    ],
};

/// A piece of IT equipment in the asset register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(flatten)]
    pub metadata: EntityMetadata,

    // Identification
    pub designation: Option<String>,
    pub marque: Option<String>,
    pub modele: Option<String>,
    pub numero_serie: Option<String>,
    pub categorie: Option<String>,

    // Lifecycle
    pub statut: Option<String>,
    pub utilisateur: Option<String>,
    pub site: Option<String>,
    pub date_achat: Option<NaiveDate>,
    pub date_fin_garantie: Option<NaiveDate>,
    pub prix_achat: Option<f64>,

    pub commentaire: Option<String>,
}

impl TrackedEntity for Equipment {
    type Payload = EquipmentPayload;

    fn schema() -> &'static EntitySchema {
        &EQUIPMENT_SCHEMA
    }

    fn blank(metadata: EntityMetadata) -> Self {
        Self {
            metadata,
            designation: None,
            marque: None,
            modele: None,
            numero_serie: None,
            categorie: None,
            statut: None,
            utilisateur: None,
            site: None,
            date_achat: None,
            date_fin_garantie: None,
            prix_achat: None,
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
            ("designation", FieldValue::from_text(&self.designation)),
            ("marque", FieldValue::from_text(&self.marque)),
            ("modele", FieldValue::from_text(&self.modele)),
            ("numero_serie", FieldValue::from_text(&self.numero_serie)),
            ("categorie", FieldValue::from_text(&self.categorie)),
            ("statut", FieldValue::from_text(&self.statut)),
            ("utilisateur", FieldValue::from_text(&self.utilisateur)),
            ("site", FieldValue::from_text(&self.site)),
            ("date_achat", FieldValue::from_date(self.date_achat)),
            (
                "date_fin_garantie",
                FieldValue::from_date(self.date_fin_garantie),
            ),
            ("prix_achat", FieldValue::from_number(self.prix_achat)),
            ("commentaire", FieldValue::from_text(&self.commentaire)),
        ])
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> CoreErrorResult<()> {
        match field {
            "designation" => self.designation = value.into_text(field)?,
            "marque" => self.marque = value.into_text(field)?,
            "modele" => self.modele = value.into_text(field)?,
            "numero_serie" => self.numero_serie = value.into_text(field)?,
            "categorie" => self.categorie = value.into_text(field)?,
            "statut" => self.statut = value.into_text(field)?,
            "utilisateur" => self.utilisateur = value.into_text(field)?,
            "site" => self.site = value.into_text(field)?,
            "date_achat" => self.date_achat = value.into_date(field)?,
            "date_fin_garantie" => self.date_fin_garantie = value.into_date(field)?,
            "prix_achat" => self.prix_achat = value.into_number(field)?,
            "commentaire" => self.commentaire = value.into_text(field)?,
            _ => return Err(CoreError::unknown_field(EntityType::Equipment.as_str(), field)),
        }
        Ok(())
    }
}

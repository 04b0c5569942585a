use crate::{
    CoreError, EntityMetadata, EntitySchema, EntityType, FieldMap, FieldSpec, FieldValue,
    PhoneLinePayload, Result as CoreErrorResult, TrackedEntity,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub static PHONE_LINE_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::PhoneLine,
    table: "phone_lines",
    fields: &[
        FieldSpec::text("numero"),
        FieldSpec::text("operateur"),
        FieldSpec::text("type_ligne"),
        FieldSpec::text("titulaire"),
        FieldSpec::text("service"),
        FieldSpec::text("statut"),
        FieldSpec::date("date_activation"),
        FieldSpec::date("date_resiliation"),
        FieldSpec::number("cout_mensuel"),
        FieldSpec::text("commentaire"),
    ],
};

/// A fixed or mobile telephone line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneLine {
    #[serde(flatten)]
    pub metadata: EntityMetadata,

    pub numero: Option<String>,
    pub operateur: Option<String>,
    pub type_ligne: Option<String>,

    // Assignment
    pub titulaire: Option<String>,
    pub service: Option<String>,

    pub statut: Option<String>,
    pub date_activation: Option<NaiveDate>,
    pub date_resiliation: Option<NaiveDate>,
    pub cout_mensuel: Option<f64>,

    pub commentaire: Option<String>,
}

impl TrackedEntity for PhoneLine {
    type Payload = PhoneLinePayload;

    fn schema() -> &'static EntitySchema {
        &PHONE_LINE_SCHEMA
    }

    fn blank(metadata: EntityMetadata) -> Self {
        Self {
            metadata,
            numero: None,
            operateur: None,
            type_ligne: None,
            titulaire: None,
            service: None,
            statut: None,
            date_activation: None,
            date_resiliation: None,
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
            ("numero", FieldValue::from_text(&self.numero)),
            ("operateur", FieldValue::from_text(&self.operateur)),
            ("type_ligne", FieldValue::from_text(&self.type_ligne)),
            ("titulaire", FieldValue::from_text(&self.titulaire)),
            ("service", FieldValue::from_text(&self.service)),
            ("statut", FieldValue::from_text(&self.statut)),
            ("date_activation", FieldValue::from_date(self.date_activation)),
            (
                "date_resiliation",
                FieldValue::from_date(self.date_resiliation),
            ),
            ("cout_mensuel", FieldValue::from_number(self.cout_mensuel)),
            ("commentaire", FieldValue::from_text(&self.commentaire)),
        ])
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> CoreErrorResult<()> {
        match field {
            "numero" => self.numero = value.into_text(field)?,
            "operateur" => self.operateur = value.into_text(field)?,
            "type_ligne" => self.type_ligne = value.into_text(field)?,
            "titulaire" => self.titulaire = value.into_text(field)?,
            "service" => self.service = value.into_text(field)?,
            "statut" => self.statut = value.into_text(field)?,
            "date_activation" => self.date_activation = value.into_date(field)?,
            "date_resiliation" => self.date_resiliation = value.into_date(field)?,
            "cout_mensuel" => self.cout_mensuel = value.into_number(field)?,
            "commentaire" => self.commentaire = value.into_text(field)?,
            _ => {
                return Err(CoreError::unknown_field(
                    EntityType::PhoneLine.as_str(),
                    field,
                ));
            }
        }
        Ok(())
    }
}

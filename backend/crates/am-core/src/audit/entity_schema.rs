use crate::EntityType;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields every entity carries that are managed by the system and never
/// diffed or assigned from a payload.
pub const BOOKKEEPING_FIELDS: &[&str] = &["id", "version", "created_at", "updated_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Empty input normalizes to the `UNSET_SENTINEL` placeholder
    Text,
    /// Empty input normalizes to null
    Date,
    /// Empty input normalizes to null (a numeric column cannot hold the placeholder)
    Number,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
        }
    }

    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Number,
        }
    }
}

/// Declarative description of one tracked entity type.
///
/// The normalizer, the change detector and the generic repository are all
/// driven by this table, so adding a field to an entity means adding it here
/// and to the entity struct; no per-type diff code exists.
#[derive(Debug)]
pub struct EntitySchema {
    pub entity_type: EntityType,
    pub table: &'static str,
    /// Domain fields in declaration order
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.field(name).map(|spec| spec.kind)
    }

    pub fn excluded(&self) -> &'static [&'static str] {
        BOOKKEEPING_FIELDS
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        BOOKKEEPING_FIELDS.contains(&name)
    }

    pub fn date_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|spec| spec.kind == FieldKind::Date)
            .map(|spec| spec.name)
    }
}

//! Value normalization.
//!
//! Maps raw payload fields onto their canonical [`FieldValue`] so that
//! "nothing entered" compares equal no matter how the client expressed it.
//! Malformed dates and numbers are coerced to null rather than rejected.

use crate::{EntitySchema, FieldKind, FieldValue, RawField, UNSET_SENTINEL};

use chrono::{DateTime, NaiveDate};

const ACCEPTED_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Normalized candidate values, in payload field order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedPayload {
    fields: Vec<(&'static str, FieldValue)>,
}

impl NormalizedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. A repeated field keeps its original position.
    pub fn push(&mut self, field: &'static str, value: FieldValue) {
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Wire form of every value, for feeding back through [`normalize`]
    pub fn to_raw(&self) -> Vec<(&'static str, RawField)> {
        self.fields
            .iter()
            .map(|(name, value)| (*name, value.to_raw()))
            .collect()
    }
}

impl FromIterator<(&'static str, FieldValue)> for NormalizedPayload {
    fn from_iter<I: IntoIterator<Item = (&'static str, FieldValue)>>(iter: I) -> Self {
        let mut payload = NormalizedPayload::new();
        for (field, value) in iter {
            payload.push(field, value);
        }
        payload
    }
}

/// Normalize the fields present in a payload. Absent fields are skipped.
pub fn normalize<'a, I>(fields: I, schema: &EntitySchema) -> NormalizedPayload
where
    I: IntoIterator<Item = (&'static str, &'a RawField)>,
{
    fields
        .into_iter()
        .filter(|(_, raw)| !raw.is_absent())
        .map(|(field, raw)| (field, normalize_value(field, raw, schema.kind_of(field))))
        .collect()
}

/// Normalize a payload for creation: every domain field of the schema is
/// produced, absent ones as if they had been sent empty.
pub fn normalize_complete<'a, I>(fields: I, schema: &EntitySchema) -> NormalizedPayload
where
    I: IntoIterator<Item = (&'static str, &'a RawField)>,
{
    let provided: Vec<(&'static str, &RawField)> = fields.into_iter().collect();

    schema
        .fields
        .iter()
        .map(|spec| {
            let raw = provided
                .iter()
                .find(|(name, _)| *name == spec.name)
                .map_or(&RawField::Absent, |(_, raw)| *raw);
            (spec.name, normalize_value(spec.name, raw, Some(spec.kind)))
        })
        .collect()
}

/// Normalize a single value. `kind` is `None` for fields outside the schema
/// (bookkeeping fields), which are carried through as plain text.
pub fn normalize_value(field: &str, raw: &RawField, kind: Option<FieldKind>) -> FieldValue {
    let text = match raw {
        RawField::Value(s) if !s.is_empty() => s,
        _ => {
            return match kind {
                Some(FieldKind::Text) => FieldValue::text(UNSET_SENTINEL),
                _ => FieldValue::Null,
            };
        }
    };

    match kind {
        Some(FieldKind::Text) | None => FieldValue::Text(text.clone()),
        Some(FieldKind::Date) => match parse_date(text) {
            Some(date) => FieldValue::Date(date),
            None => {
                log::warn!("Coercing unparseable date '{}' for field {} to null", text, field);
                FieldValue::Null
            }
        },
        Some(FieldKind::Number) => match parse_number(text) {
            Some(number) => FieldValue::Number(number),
            None => {
                log::warn!("Coercing unparseable number '{}' for field {} to null", text, field);
                FieldValue::Null
            }
        },
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();

    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn parse_number(input: &str) -> Option<f64> {
    // Decimal commas are common in hand-typed French amounts
    let candidate = input.trim().replace(',', ".");
    candidate.parse::<f64>().ok().filter(|n| n.is_finite())
}

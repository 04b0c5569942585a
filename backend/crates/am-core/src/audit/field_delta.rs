use crate::FieldValue;

use serde::{Deserialize, Serialize};

/// A single field's old and new value, stringified for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDelta {
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

/// Accumulates deltas, dropping pairs whose values are equal
pub struct FieldDeltaBuilder {
    deltas: Vec<FieldDelta>,
}

impl Default for FieldDeltaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldDeltaBuilder {
    pub fn new() -> Self {
        Self { deltas: Vec::new() }
    }

    /// Track a field, comparing by value rather than by string form so that
    /// `Null` and the text placeholder stay distinct
    pub fn track(&mut self, field: &str, old_value: &FieldValue, new_value: &FieldValue) {
        if old_value != new_value {
            self.deltas.push(FieldDelta {
                field: field.to_string(),
                old_value: old_value.to_display(),
                new_value: new_value.to_display(),
            });
        }
    }

    pub fn build(self) -> Vec<FieldDelta> {
        self.deltas
    }
}

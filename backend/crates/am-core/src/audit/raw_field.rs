use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One field of an inbound update payload, exactly as the client sent it.
///
/// Missing keys deserialize to `Absent` through `#[serde(default)]`, an
/// explicit JSON `null` becomes `Null`, and every other JSON value is kept as
/// its textual form so the normalizer can parse it against the field kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawField {
    #[default]
    Absent,
    Null,
    Value(String),
}

impl RawField {
    pub fn value<S: Into<String>>(value: S) -> Self {
        RawField::Value(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawField::Absent)
    }

    /// True for `null` and for the empty string, the two inputs that
    /// normalize to the "unset" representation of a field.
    pub fn is_empty(&self) -> bool {
        match self {
            RawField::Absent | RawField::Null => true,
            RawField::Value(s) => s.is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for RawField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => RawField::Null,
            Value::String(s) => RawField::Value(s),
            Value::Number(n) => RawField::Value(n.to_string()),
            Value::Bool(b) => RawField::Value(b.to_string()),
            other => RawField::Value(other.to_string()),
        })
    }
}

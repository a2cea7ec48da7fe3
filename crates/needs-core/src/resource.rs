//! A single minimum need record.
//!
//! Field names on the wire are the human-readable keys used by needs files and
//! by the `Readable sentence` template (`{{ Resource name }}`, `{{ Default }}`, ...).
//!
//! Decoding never fails for a JSON object. A known key holding `null` or a value
//! of the wrong shape is left in [`Resource::extra`] under its own name, so it
//! is written back exactly as read and its typed field stays `None`.

use std::fmt;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A per-person amount or bound.
///
/// Needs files store amounts as numeric strings (`"2.8"`), but plain JSON
/// numbers are accepted as well. The value is kept verbatim and never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(Number),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Amount {
    /// Non-finite values have no JSON number form and are kept as text.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(|| Self::Text(value.to_string()), Self::Number)
    }
}

/// One resource in the needs table.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Resource {
    #[serde(
        rename = "Resource name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_name: Option<String>,

    /// Recommended amount per person per interval.
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Amount>,

    #[serde(
        rename = "Minimum allowed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_allowed: Option<Amount>,

    #[serde(
        rename = "Maximum allowed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum_allowed: Option<Amount>,

    /// Dispatch interval label, e.g. `weekly` or `single`.
    #[serde(rename = "Frequency", default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    #[serde(rename = "Unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(rename = "Units", default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(
        rename = "Unit abbreviation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_abbreviation: Option<String>,

    #[serde(
        rename = "Resource description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_description: Option<String>,

    /// Template with `{{ Field name }}` placeholders for the keys above.
    #[serde(
        rename = "Readable sentence",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub readable_sentence: Option<String>,

    /// Unknown keys, plus known keys whose value did not fit the typed field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// A bare record with only a name and a default amount.
    #[must_use]
    pub fn new(resource_name: impl Into<String>, default: impl Into<Amount>) -> Self {
        Self {
            resource_name: Some(resource_name.into()),
            default: Some(default.into()),
            minimum_allowed: None,
            maximum_allowed: None,
            frequency: None,
            unit: None,
            units: None,
            unit_abbreviation: None,
            resource_description: None,
            readable_sentence: None,
            extra: Map::new(),
        }
    }

    /// Decode a record from the fields of a JSON object.
    #[must_use]
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        Self {
            resource_name: take_field(&mut fields, "Resource name"),
            default: take_field(&mut fields, "Default"),
            minimum_allowed: take_field(&mut fields, "Minimum allowed"),
            maximum_allowed: take_field(&mut fields, "Maximum allowed"),
            frequency: take_field(&mut fields, "Frequency"),
            unit: take_field(&mut fields, "Unit"),
            units: take_field(&mut fields, "Units"),
            unit_abbreviation: take_field(&mut fields, "Unit abbreviation"),
            resource_description: take_field(&mut fields, "Resource description"),
            readable_sentence: take_field(&mut fields, "Readable sentence"),
            extra: fields,
        }
    }

    /// The unit abbreviation, if present and non-empty.
    #[must_use]
    pub fn abbreviation(&self) -> Option<&str> {
        self.unit_abbreviation
            .as_deref()
            .filter(|abbr| !abbr.is_empty())
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_fields)
    }
}

/// Remove `key` from `fields` and decode it, unless it is `null` or does not
/// decode as `T`. In that case the raw value stays in `fields`.
pub(crate) fn take_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Option<T> {
    let value = fields.get(key).filter(|value| !value.is_null())?;
    let decoded = T::deserialize(value).ok()?;
    fields.remove(key);
    Some(decoded)
}

//! The needs table document.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::NeedsError;
use crate::resource::{Resource, take_field};

/// The full needs table: ordered resources plus provenance and profile.
///
/// Every top-level key is optional and any JSON object decodes. Keys that are
/// `null` or do not fit their typed field stay in `extra` unchanged, so a table
/// without a usable `resources` list only fails once an accessor needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct NeedsTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,

    /// Citation for where the amounts come from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,

    /// Name of the needs profile or standard, e.g. `BNPB_en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NeedsTable {
    /// An empty table with a resources list, ready for appends.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resources: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Build a table from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::InvalidType` if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, NeedsError> {
        match value {
            Value::Object(fields) => Ok(Self::from_fields(fields)),
            other => Err(NeedsError::InvalidType {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    /// Decode a table from the fields of a JSON object.
    ///
    /// `resources` is only taken when it is a list of objects.
    #[must_use]
    pub fn from_fields(mut fields: Map<String, Value>) -> Self {
        let resources = match fields.remove("resources") {
            Some(Value::Array(items)) if items.iter().all(Value::is_object) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(record) => Some(Resource::from_fields(record)),
                        _ => None,
                    })
                    .collect(),
            ),
            Some(unusable) => {
                fields.insert("resources".to_string(), unusable);
                None
            }
            None => None,
        };

        Self {
            resources,
            provenance: take_field(&mut fields, "provenance"),
            profile: take_field(&mut fields, "profile"),
            extra: fields,
        }
    }

    /// The resources list.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::MissingResources` if the table has no `resources` key.
    pub fn resources(&self) -> Result<&[Resource], NeedsError> {
        self.resources
            .as_deref()
            .ok_or(NeedsError::MissingResources)
    }

    /// Mutable access to the resources list.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::MissingResources` if the table has no `resources` key.
    pub fn resources_mut(&mut self) -> Result<&mut Vec<Resource>, NeedsError> {
        self.resources
            .as_mut()
            .ok_or(NeedsError::MissingResources)
    }
}

impl<'de> Deserialize<'de> for NeedsTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_fields)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn non_objects_are_invalid_type() {
        for value in [json!([]), json!("needs"), json!(3), json!(null), json!(true)] {
            let err = NeedsTable::from_value(value).unwrap_err();
            assert!(matches!(err, NeedsError::InvalidType { .. }), "{err}");
        }
    }

    #[test]
    fn unusable_resources_are_kept_but_inaccessible() {
        for document in [
            json!({ "resources": "rice" }),
            json!({ "resources": [{ "Resource name": "Rice" }, 3] }),
            json!({ "resources": null }),
        ] {
            let table = NeedsTable::from_value(document.clone()).unwrap();
            assert!(matches!(
                table.resources(),
                Err(NeedsError::MissingResources)
            ));
            assert_eq!(serde_json::to_value(&table).unwrap(), document);
        }
    }

    #[test]
    fn mistyped_provenance_and_profile_are_kept_verbatim() {
        let document = json!({ "resources": [], "provenance": 2008, "profile": null });
        let table = NeedsTable::from_value(document.clone()).unwrap();
        assert_eq!(table.provenance, None);
        assert_eq!(table.profile, None);
        assert_eq!(table.resources().unwrap().len(), 0);
        assert_eq!(serde_json::to_value(&table).unwrap(), document);
    }

    #[test]
    fn empty_object_is_a_table_without_resources() {
        let table = NeedsTable::from_value(json!({})).unwrap();
        assert_eq!(table, NeedsTable::default());
        assert!(matches!(
            table.resources(),
            Err(NeedsError::MissingResources)
        ));
    }

    #[test]
    fn invalid_type_message_names_the_kind() {
        let err = NeedsTable::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid needs table: expected a record, found an array"
        );
    }
}

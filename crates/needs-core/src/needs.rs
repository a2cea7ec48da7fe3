//! The owning minimum needs component.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::NeedsError;
use crate::resource::{Amount, Resource};
use crate::table::NeedsTable;
use crate::translate::Translate;

/// Frequency given to needs appended without an explicit one.
pub const DEFAULT_FREQUENCY: &str = "weekly";

/// In-memory minimum needs table with lookup, append, replace and persistence.
///
/// The table starts unset. It is seeded by [`MinimumNeeds::with_defaults`],
/// [`MinimumNeeds::update_minimum_needs`], [`MinimumNeeds::replace`] or
/// [`MinimumNeeds::read_from_file`], and grown by [`MinimumNeeds::set_need`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinimumNeeds {
    pub(crate) table: Option<NeedsTable>,
}

impl MinimumNeeds {
    /// An instance with no table set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_table(table: NeedsTable) -> Self {
        Self { table: Some(table) }
    }

    /// An instance seeded with the built-in default table.
    #[must_use]
    pub fn with_defaults<T: Translate + ?Sized>(translator: &T) -> Self {
        Self::with_table(Self::defaults(translator))
    }

    /// The built-in default table. Does not touch any instance state.
    #[must_use]
    pub fn defaults<T: Translate + ?Sized>(translator: &T) -> NeedsTable {
        crate::defaults::defaults(translator)
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.table.is_some()
    }

    /// First resource whose name matches `resource_name` exactly.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::MissingResources` if there is no resources list.
    pub fn get_need(&self, resource_name: &str) -> Result<Option<&Resource>, NeedsError> {
        Ok(self
            .resources()?
            .iter()
            .find(|need| need.resource_name.as_deref() == Some(resource_name)))
    }

    /// Display name to default amount, in table order.
    ///
    /// Keys are the translated resource name, suffixed with ` [abbr]` when the
    /// resource has a unit abbreviation. When two resources produce the same
    /// key the later amount wins and the key keeps its first position.
    ///
    /// # Errors
    ///
    /// - `NeedsError::MissingResources` if there is no resources list
    /// - `NeedsError::MissingField` if a resource has no usable `Resource name`
    ///   or `Default`; such a resource is named by its position (`#2`) when it
    ///   has no name
    pub fn get_minimum_needs<T: Translate + ?Sized>(
        &self,
        translator: &T,
    ) -> Result<IndexMap<String, Amount>, NeedsError> {
        let mut minimum_needs = IndexMap::new();
        for (index, resource) in self.resources()?.iter().enumerate() {
            let Some(resource_name) = resource.resource_name.as_deref() else {
                return Err(NeedsError::MissingField {
                    resource: format!("#{index}"),
                    field: "Resource name",
                });
            };
            let amount = resource
                .default
                .clone()
                .ok_or_else(|| NeedsError::MissingField {
                    resource: resource_name.to_string(),
                    field: "Default",
                })?;

            let name = translator.translate(resource_name);
            let key = match resource.abbreviation() {
                Some(abbr) => format!("{name} [{abbr}]"),
                None => name,
            };
            minimum_needs.insert(key, amount);
        }
        Ok(minimum_needs)
    }

    /// The live table, not a copy.
    #[must_use]
    pub const fn get_full_needs(&self) -> Option<&NeedsTable> {
        self.table.as_ref()
    }

    /// Mutable handle to the live table for in-place edits.
    pub fn get_full_needs_mut(&mut self) -> Option<&mut NeedsTable> {
        self.table.as_mut()
    }

    /// Append a new need. Duplicate names are allowed and accumulate.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::MissingResources` if there is no resources list.
    pub fn set_need(
        &mut self,
        resource: impl Into<String>,
        amount: impl Into<Amount>,
        units: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Result<(), NeedsError> {
        let resources = self
            .table
            .as_mut()
            .ok_or(NeedsError::MissingResources)?
            .resources_mut()?;

        resources.push(Resource {
            unit_abbreviation: Some(units.into()),
            frequency: Some(frequency.into()),
            ..Resource::new(resource, amount)
        });
        Ok(())
    }

    /// [`set_need`](Self::set_need) with the [`DEFAULT_FREQUENCY`].
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::MissingResources` if there is no resources list.
    pub fn set_weekly_need(
        &mut self,
        resource: impl Into<String>,
        amount: impl Into<Amount>,
        units: impl Into<String>,
    ) -> Result<(), NeedsError> {
        self.set_need(resource, amount, units, DEFAULT_FREQUENCY)
    }

    /// Replace the whole table with `minimum_needs`.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::InvalidType` if the value is not a JSON object.
    /// The current table is left untouched. Any object is accepted; keys
    /// that are missing or mistyped only surface through the accessors.
    pub fn update_minimum_needs(&mut self, minimum_needs: Value) -> Result<(), NeedsError> {
        let table = NeedsTable::from_value(minimum_needs)?;
        self.replace(table);
        Ok(())
    }

    /// Replace the whole table with an already typed one.
    pub fn replace(&mut self, table: NeedsTable) {
        self.table = Some(table);
    }

    /// Full table as a JSON value, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::Serialize` if encoding fails.
    pub fn to_value(&self) -> Result<Option<Value>, NeedsError> {
        self.table
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(NeedsError::from)
    }

    fn resources(&self) -> Result<&[Resource], NeedsError> {
        self.table
            .as_ref()
            .ok_or(NeedsError::MissingResources)?
            .resources()
    }
}

impl From<NeedsTable> for MinimumNeeds {
    fn from(table: NeedsTable) -> Self {
        Self::with_table(table)
    }
}

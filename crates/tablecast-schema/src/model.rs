use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::Table;
use crate::value::Value;

/// Table collection owned by a declarative base.
///
/// Presence of metadata is what distinguishes a real declarative base from
/// an arbitrary object; resolver registration checks for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetaData {
    pub tables: BTreeMap<String, Table>,
}

/// A declarative base: a named root that models attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelBase {
    pub name: String,
    pub metadata: Option<MetaData>,
}

impl ModelBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: Some(MetaData::default()),
        }
    }

    /// A base-shaped object without the metadata marker. Resolver
    /// registration rejects these.
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: None,
        }
    }

    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Declare a model bound to `table` under this base, recording the
    /// table in the base metadata.
    pub fn declare(&mut self, name: impl Into<String>, table: Table) -> ModelType {
        let name = name.into();
        if let Some(metadata) = self.metadata.as_mut() {
            metadata.tables.insert(table.name.clone(), table.clone());
        }
        ModelType {
            name,
            base: self.name.clone(),
            table,
        }
    }
}

/// A declarative model: a named type bound to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelType {
    pub name: String,
    pub base: String,
    pub table: Table,
}

impl ModelType {
    /// New empty instance of this model.
    pub fn instance(&self) -> ModelInstance {
        ModelInstance::new(self.name.clone())
    }
}

/// A populated model instance: field values in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInstance {
    pub model: String,
    values: Vec<(String, Value)>,
}

impl ModelInstance {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            values: Vec::new(),
        }
    }

    /// Set a field value, replacing any previous value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }
}

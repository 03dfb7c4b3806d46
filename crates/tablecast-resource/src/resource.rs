use serde::{Deserialize, Serialize};

use tablecast_schema::{ModelInstance, Table, Value};

use crate::errors::{ResourceError, Result};
use crate::field::FieldSpec;
use crate::registry::RegistrationCache;

/// A generated resource type: a described record with an ordered field list
/// and back-references to its origin.
///
/// Created once per factory call, registered in the cache, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceType {
    pub name: String,
    /// Namespace the type was defined under.
    pub module: String,
    /// Fields in declaration order.
    pub fields: Vec<(String, FieldSpec)>,
    /// Originating table, when derived from one.
    pub table: Option<Table>,
    /// Originating declarative model, when derived from one.
    pub model: Option<String>,
    /// Names of the base resource and mixins this type was composed from.
    pub bases: Vec<String>,
}

impl ResourceType {
    /// Registry key: `module.name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, spec)| spec)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(field, _)| field.as_str())
    }

    /// New empty instance of this resource type.
    pub fn instance(&self) -> ResourceInstance {
        ResourceInstance::new(self.qualified_name())
    }
}

/// A populated resource instance: field values in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInstance {
    /// Qualified name of the resource type this instance belongs to.
    pub resource: String,
    values: Vec<(String, Value)>,
}

impl ResourceInstance {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
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

    /// Convert this instance back into an instance of its originating model
    /// by applying the registered reverse mapping.
    ///
    /// Fails if the resource type is not in the cache, has no originating
    /// model, or no reverse mapping was generated for it.
    pub fn to_model(&self, cache: &RegistrationCache) -> Result<ModelInstance> {
        let resource = cache
            .resource(&self.resource)
            .ok_or_else(|| ResourceError::ResourceNotFound(self.resource.clone()))?;
        let model = resource
            .model
            .as_deref()
            .ok_or_else(|| ResourceError::ModelRequired(self.resource.clone()))?;
        let mapping = cache
            .mapping(&self.resource, model)
            .ok_or_else(|| ResourceError::MappingNotFound {
                source: self.resource.clone(),
                target: model.to_string(),
            })?;
        Ok(mapping.apply_to_model(self))
    }
}

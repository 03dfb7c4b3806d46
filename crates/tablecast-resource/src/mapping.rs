use serde::{Deserialize, Serialize};

use tablecast_schema::{ModelInstance, ModelType};

use crate::errors::{ResourceError, Result};
use crate::registry::RegistrationCache;
use crate::resource::{ResourceInstance, ResourceType};

/// A unidirectional conversion between a model and a resource type.
///
/// Field pairs are (source field, target field); values are copied by name,
/// and fields absent on the source instance are left unset on the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub source: String,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl Mapping {
    /// Apply a resource→model mapping.
    pub fn apply_to_model(&self, source: &ResourceInstance) -> ModelInstance {
        let mut target = ModelInstance::new(self.target.clone());
        for (source_field, target_field) in &self.fields {
            if let Some(value) = source.get(source_field) {
                target.set(target_field.clone(), value.clone());
            }
        }
        target
    }

    /// Apply a model→resource mapping.
    pub fn apply_to_resource(&self, source: &ModelInstance) -> ResourceInstance {
        let mut target = ResourceInstance::new(self.target.clone());
        for (source_field, target_field) in &self.fields {
            if let Some(value) = source.get(source_field) {
                target.set(target_field.clone(), value.clone());
            }
        }
        target
    }
}

/// Generate the forward (model→resource) and reverse (resource→model)
/// mappings for a model/resource pair.
///
/// Source fields are discovered through the field resolver registered for
/// the model's declarative base; the mapped set is the name intersection of
/// resolved fields and resource fields. `reverse_exclude` removes pairs
/// from the reverse mapping only.
pub fn mapping_factory(
    model: &ModelType,
    resource: &ResourceType,
    reverse_exclude: &[String],
    cache: &RegistrationCache,
) -> Result<(Mapping, Mapping)> {
    let resolver = cache
        .field_resolver(&model.base)
        .ok_or_else(|| ResourceError::NoResolver(model.base.clone()))?;
    let field_dict = resolver.field_dict(model);

    let mut forward_fields = Vec::new();
    for name in resource.field_names() {
        if field_dict.iter().any(|(field, _)| field == name) {
            forward_fields.push((name.to_string(), name.to_string()));
        }
    }

    let reverse_fields = forward_fields
        .iter()
        .filter(|(field, _)| !reverse_exclude.contains(field))
        .map(|(source, target)| (target.clone(), source.clone()))
        .collect();

    let forward = Mapping {
        source: model.name.clone(),
        target: resource.qualified_name(),
        fields: forward_fields,
    };
    let reverse = Mapping {
        source: resource.qualified_name(),
        target: model.name.clone(),
        fields: reverse_fields,
    };
    Ok((forward, reverse))
}

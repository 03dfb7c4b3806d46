use std::collections::BTreeMap;
use std::fmt;

use tablecast_schema::{Column, ModelType};

use crate::mapping::Mapping;
use crate::resource::ResourceType;

/// Pluggable strategy exposing the fields of a model for generic mapping
/// generation.
pub trait FieldResolver {
    /// Field name → originating column, keys unique, declaration order
    /// preserved.
    fn field_dict(&self, model: &ModelType) -> Vec<(String, Column)>;
}

/// Process-wide registration state: field resolvers, generated resource
/// types, and mappings.
///
/// Append-only in normal operation; `clear_resources`/`clear_mappings`
/// exist for test isolation. No internal locking — callers coordinate
/// concurrent access themselves.
#[derive(Default)]
pub struct RegistrationCache {
    resolvers: BTreeMap<String, Box<dyn FieldResolver>>,
    resources: BTreeMap<String, ResourceType>,
    mappings: BTreeMap<(String, String), Mapping>,
}

impl RegistrationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a resolver with a declarative base. Re-registering the same
    /// base replaces the previous resolver.
    pub fn register_field_resolver(&mut self, base: impl Into<String>, resolver: Box<dyn FieldResolver>) {
        self.resolvers.insert(base.into(), resolver);
    }

    pub fn field_resolver(&self, base: &str) -> Option<&dyn FieldResolver> {
        self.resolvers.get(base).map(|resolver| resolver.as_ref())
    }

    /// Register a generated resource type under its qualified name. A later
    /// registration under the same name replaces the earlier one.
    pub fn register_resource(&mut self, resource: ResourceType) {
        self.resources.insert(resource.qualified_name(), resource);
    }

    pub fn resource(&self, qualified_name: &str) -> Option<&ResourceType> {
        self.resources.get(qualified_name)
    }

    pub fn register_mapping(&mut self, mapping: Mapping) {
        self.mappings
            .insert((mapping.source.clone(), mapping.target.clone()), mapping);
    }

    pub fn mapping(&self, source: &str, target: &str) -> Option<&Mapping> {
        self.mappings
            .get(&(source.to_string(), target.to_string()))
    }

    pub fn clear_resources(&mut self) {
        self.resources.clear();
    }

    pub fn clear_mappings(&mut self) {
        self.mappings.clear();
    }
}

impl fmt::Debug for RegistrationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationCache")
            .field("resolvers", &self.resolvers.keys().collect::<Vec<_>>())
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("mappings", &self.mappings.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldSpec, FieldType};

    fn resource(name: &str) -> ResourceType {
        ResourceType {
            name: name.to_string(),
            module: "tests".to_string(),
            fields: vec![("id".to_string(), FieldSpec::new(FieldType::Integer))],
            table: None,
            model: None,
            bases: Vec::new(),
        }
    }

    #[test]
    fn clear_resources_leaves_mappings_alone() {
        let mut cache = RegistrationCache::new();
        cache.register_resource(resource("A"));
        cache.register_mapping(Mapping {
            source: "A".to_string(),
            target: "B".to_string(),
            fields: Vec::new(),
        });

        cache.clear_resources();

        assert!(cache.resource("tests.A").is_none());
        assert!(cache.mapping("A", "B").is_some());
        cache.clear_mappings();
        assert!(cache.mapping("A", "B").is_none());
    }

    #[test]
    fn reregistering_a_resource_replaces_it() {
        let mut cache = RegistrationCache::new();
        cache.register_resource(resource("A"));
        let mut updated = resource("A");
        updated.fields.push(("extra".to_string(), FieldSpec::new(FieldType::String)));

        cache.register_resource(updated);

        let stored = cache.resource("tests.A").expect("resource registered");
        assert_eq!(stored.fields.len(), 2);
    }
}

use tablecast_resource::{
    mapping_factory, FieldSpec, Mapping, RegistrationCache, ResourceType,
};
use tablecast_schema::{ModelType, Table};

use crate::errors::{BridgeError, Result};
use crate::fields::{field_factory, FieldTypeTable};

/// Namespace used when no module override is supplied.
pub const DEFAULT_MODULE: &str = "tablecast.resources";

/// Name recorded for the implicit base resource every generated type
/// composes (the base that carries the `to_model` operation).
const BASE_RESOURCE: &str = "ModelResource";

/// Factory input: anything exposing a table, and possibly a declarative
/// model bound to it.
pub trait TableSource {
    fn table(&self) -> Option<&Table>;
    fn model(&self) -> Option<&ModelType>;
}

impl TableSource for Table {
    fn table(&self) -> Option<&Table> {
        Some(self)
    }

    fn model(&self) -> Option<&ModelType> {
        None
    }
}

impl TableSource for ModelType {
    fn table(&self) -> Option<&Table> {
        Some(&self.table)
    }

    fn model(&self) -> Option<&ModelType> {
        Some(self)
    }
}

/// A named bundle of fields composed into the generated resource ahead of
/// the column-derived ones.
#[derive(Debug, Clone)]
pub struct Mixin {
    pub name: String,
    pub fields: Vec<(String, FieldSpec)>,
}

/// Options for `table_resource_factory`.
#[derive(Debug, Clone)]
pub struct FactoryOptions {
    /// Namespace override for the generated type; any deterministic string
    /// per logical call site works.
    pub module: Option<String>,
    /// Name override; defaults to the table name.
    pub resource_name: Option<String>,
    /// Field bundles composed ahead of the column-derived fields.
    pub mixins: Vec<Mixin>,
    /// Column names to leave out of the generated resource.
    pub exclude_fields: Vec<String>,
    /// Extra fields merged in last; they extend or override and are never
    /// subject to exclusion.
    pub additional_fields: Vec<(String, FieldSpec)>,
    /// Fields removed from the reverse (resource→model) mapping only.
    pub reverse_exclude_fields: Vec<String>,
    /// Generate and register forward/reverse mappings.
    pub generate_mappings: bool,
    /// Return the mapping pair as well; implies `generate_mappings`.
    pub return_mappings: bool,
    /// Conversion table to consult.
    pub field_table: FieldTypeTable,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            module: None,
            resource_name: None,
            mixins: Vec::new(),
            exclude_fields: Vec::new(),
            additional_fields: Vec::new(),
            reverse_exclude_fields: Vec::new(),
            generate_mappings: false,
            return_mappings: false,
            field_table: FieldTypeTable::standard(),
        }
    }
}

/// Output of `table_resource_factory`. `mappings` is populated iff
/// `return_mappings` was set.
#[derive(Debug, Clone)]
pub struct GeneratedResource {
    pub resource: ResourceType,
    pub mappings: Option<(Mapping, Mapping)>,
}

/// Synthesize a resource type from a table or declarative model.
///
/// Columns are converted in declaration order through the options' field
/// table; excluded names are skipped and unmatched types dropped. When
/// mappings are requested the resource layer's mapping factory is invoked
/// with the model as conversion target. The resource and mappings are
/// registered in `cache` only after every step has succeeded.
pub fn table_resource_factory(
    source: &dyn TableSource,
    options: FactoryOptions,
    cache: &mut RegistrationCache,
) -> Result<GeneratedResource> {
    let table = source.table().ok_or(BridgeError::NotATable)?;
    let model = source.model();

    let generate_mappings = options.generate_mappings || options.return_mappings;
    if generate_mappings && model.is_none() {
        return Err(BridgeError::MappingsRequireModel);
    }

    let module = options
        .module
        .clone()
        .unwrap_or_else(|| DEFAULT_MODULE.to_string());
    let name = options
        .resource_name
        .clone()
        .unwrap_or_else(|| table.name.clone());

    let mut bases: Vec<String> = options.mixins.iter().map(|mixin| mixin.name.clone()).collect();
    bases.push(BASE_RESOURCE.to_string());

    let mut fields: Vec<(String, FieldSpec)> = Vec::new();
    for mixin in &options.mixins {
        for (field, spec) in &mixin.fields {
            upsert_field(&mut fields, field, spec.clone());
        }
    }

    for column in &table.columns {
        if options.exclude_fields.iter().any(|name| name == &column.name) {
            continue;
        }
        match field_factory(&options.field_table, column) {
            Some(spec) => upsert_field(&mut fields, &column.name, spec),
            None => tracing::warn!(
                event = "column_dropped",
                table = %table.name,
                column = %column.name,
                "no field rule matches the declared type"
            ),
        }
    }

    for (field, spec) in &options.additional_fields {
        upsert_field(&mut fields, field, spec.clone());
    }

    let resource = ResourceType {
        name,
        module,
        fields,
        table: Some(table.clone()),
        model: model.map(|model| model.name.clone()),
        bases,
    };

    let mappings = match (generate_mappings, model) {
        (true, Some(model)) => Some(mapping_factory(
            model,
            &resource,
            &options.reverse_exclude_fields,
            cache,
        )?),
        _ => None,
    };

    tracing::info!(
        event = "resource_generated",
        resource = %resource.qualified_name(),
        fields = resource.fields.len(),
        with_mappings = mappings.is_some(),
    );

    cache.register_resource(resource.clone());
    if let Some((forward, reverse)) = &mappings {
        cache.register_mapping(forward.clone());
        cache.register_mapping(reverse.clone());
    }

    Ok(GeneratedResource {
        resource,
        mappings: if options.return_mappings { mappings } else { None },
    })
}

fn upsert_field(fields: &mut Vec<(String, FieldSpec)>, name: &str, spec: FieldSpec) {
    match fields.iter_mut().find(|(field, _)| field == name) {
        Some((_, slot)) => *slot = spec,
        None => fields.push((name.to_string(), spec)),
    }
}

use tablecast_resource::{FieldResolver, RegistrationCache};
use tablecast_schema::{Column, ModelBase, ModelType};

use crate::errors::{BridgeError, Result};

/// Field resolver for declarative models bound to SQL tables: exposes one
/// field per column, in declaration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaFieldResolver;

impl FieldResolver for SchemaFieldResolver {
    fn field_dict(&self, model: &ModelType) -> Vec<(String, Column)> {
        model
            .table
            .columns
            .iter()
            .map(|column| (column.name.clone(), column.clone()))
            .collect()
    }
}

/// Register the schema field resolver for every model of `base`.
///
/// Fails when the base lacks the metadata marker. Repeat registration for
/// the same base is idempotent.
pub fn register_model_base(cache: &mut RegistrationCache, base: &ModelBase) -> Result<()> {
    if !base.has_metadata() {
        return Err(BridgeError::InvalidBase(base.name.clone()));
    }
    cache.register_field_resolver(base.name.clone(), Box::new(SchemaFieldResolver));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablecast_schema::{SqlType, Table};

    #[test]
    fn field_dict_preserves_declaration_order() {
        let mut base = ModelBase::new("Base");
        let model = base.declare(
            "Event",
            Table::new(
                "events",
                vec![
                    Column::new("id", SqlType::Integer).primary_key(),
                    Column::new("kind", SqlType::string()),
                    Column::new("at", SqlType::DateTime),
                ],
            ),
        );

        let dict = SchemaFieldResolver.field_dict(&model);

        let names: Vec<&str> = dict.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["id", "kind", "at"]);
        assert!(dict[0].1.primary_key);
    }
}

use tablecast_resource::{
    mapping_factory, FieldResolver, FieldSpec, FieldType, RegistrationCache, ResourceError,
    ResourceInstance, ResourceType,
};
use tablecast_schema::{Column, ModelBase, ModelType, SqlType, Table, Value};

/// Resolver that exposes every column of the model's bound table.
struct TableResolver;

impl FieldResolver for TableResolver {
    fn field_dict(&self, model: &ModelType) -> Vec<(String, Column)> {
        model
            .table
            .columns
            .iter()
            .map(|column| (column.name.clone(), column.clone()))
            .collect()
    }
}

fn user_model(base: &mut ModelBase) -> ModelType {
    base.declare(
        "User",
        Table::new(
            "users",
            vec![
                Column::new("id", SqlType::Integer).primary_key(),
                Column::new("name", SqlType::sized_string(64)),
                Column::new("secret", SqlType::Text),
            ],
        ),
    )
}

fn user_resource() -> ResourceType {
    ResourceType {
        name: "User".to_string(),
        module: "tests".to_string(),
        fields: vec![
            (
                "id".to_string(),
                FieldSpec::new(FieldType::Integer).key().not_null(),
            ),
            (
                "name".to_string(),
                FieldSpec::new(FieldType::String).with_max_length(64),
            ),
            ("secret".to_string(), FieldSpec::new(FieldType::String)),
            ("extra".to_string(), FieldSpec::new(FieldType::String)),
        ],
        table: None,
        model: Some("User".to_string()),
        bases: vec!["ModelResource".to_string()],
    }
}

#[test]
fn mapping_factory_pairs_intersecting_fields() {
    let mut cache = RegistrationCache::new();
    cache.register_field_resolver("Base", Box::new(TableResolver));
    let mut base = ModelBase::new("Base");
    let model = user_model(&mut base);
    let resource = user_resource();

    let (forward, reverse) =
        mapping_factory(&model, &resource, &[], &cache).expect("generate mappings");

    // `extra` has no backing column and is absent from both directions.
    assert_eq!(forward.source, "User");
    assert_eq!(forward.target, "tests.User");
    assert_eq!(
        forward.fields,
        vec![
            ("id".to_string(), "id".to_string()),
            ("name".to_string(), "name".to_string()),
            ("secret".to_string(), "secret".to_string()),
        ]
    );
    assert_eq!(reverse.source, "tests.User");
    assert_eq!(reverse.target, "User");
    assert_eq!(reverse.fields.len(), 3);
}

#[test]
fn reverse_exclude_only_affects_reverse_mapping() {
    let mut cache = RegistrationCache::new();
    cache.register_field_resolver("Base", Box::new(TableResolver));
    let mut base = ModelBase::new("Base");
    let model = user_model(&mut base);
    let resource = user_resource();

    let (forward, reverse) =
        mapping_factory(&model, &resource, &["secret".to_string()], &cache)
            .expect("generate mappings");

    assert!(forward.fields.iter().any(|(field, _)| field == "secret"));
    assert!(!reverse.fields.iter().any(|(field, _)| field == "secret"));
}

#[test]
fn mapping_factory_without_resolver_fails() {
    let cache = RegistrationCache::new();
    let mut base = ModelBase::new("Base");
    let model = user_model(&mut base);
    let resource = user_resource();

    let result = mapping_factory(&model, &resource, &[], &cache);

    assert_eq!(result, Err(ResourceError::NoResolver("Base".to_string())));
}

#[test]
fn mapping_apply_copies_values_by_name() {
    let mut cache = RegistrationCache::new();
    cache.register_field_resolver("Base", Box::new(TableResolver));
    let mut base = ModelBase::new("Base");
    let model = user_model(&mut base);
    let resource = user_resource();
    let (forward, reverse) =
        mapping_factory(&model, &resource, &[], &cache).expect("generate mappings");

    let mut instance = model.instance();
    instance.set("id", 7i64);
    instance.set("name", "Ada");

    let as_resource = forward.apply_to_resource(&instance);
    assert_eq!(as_resource.resource, "tests.User");
    assert_eq!(as_resource.get("id"), Some(&Value::Int(7)));
    assert_eq!(as_resource.get("name"), Some(&Value::Text("Ada".to_string())));
    assert_eq!(as_resource.get("secret"), None);

    let back = reverse.apply_to_model(&as_resource);
    assert_eq!(back.model, "User");
    assert_eq!(back.get("id"), Some(&Value::Int(7)));
    assert_eq!(back.get("name"), Some(&Value::Text("Ada".to_string())));
}

#[test]
fn to_model_requires_registered_pieces() {
    let mut cache = RegistrationCache::new();
    let instance = ResourceInstance::new("tests.User");

    // Nothing registered at all.
    assert_eq!(
        instance.to_model(&cache),
        Err(ResourceError::ResourceNotFound("tests.User".to_string()))
    );

    // Resource registered, but derived from a raw table (no model).
    let mut table_only = user_resource();
    table_only.model = None;
    cache.register_resource(table_only);
    assert_eq!(
        instance.to_model(&cache),
        Err(ResourceError::ModelRequired("tests.User".to_string()))
    );

    // Model present but no reverse mapping was generated.
    cache.register_resource(user_resource());
    assert_eq!(
        instance.to_model(&cache),
        Err(ResourceError::MappingNotFound {
            source: "tests.User".to_string(),
            target: "User".to_string(),
        })
    );
}

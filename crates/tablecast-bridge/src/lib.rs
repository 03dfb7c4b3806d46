//! Bridge between the tablecast schema metadata and the resource layer.
//!
//! Given a table or declarative model, synthesizes an equivalent resource
//! type field-by-field through an ordered type table and, on request, asks
//! the resource layer to generate the forward/reverse mappings between the
//! two representations.

pub mod errors;
pub mod factory;
pub mod fields;
pub mod resolver;

pub use errors::{BridgeError, Result};
pub use factory::{
    table_resource_factory, FactoryOptions, GeneratedResource, Mixin, TableSource, DEFAULT_MODULE,
};
pub use fields::{field_factory, FieldRule, FieldTypeTable};
pub use resolver::{register_model_base, SchemaFieldResolver};

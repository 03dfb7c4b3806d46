//! ORM-side metadata contracts for tablecast.
//!
//! This crate defines the table, column, and declarative-model descriptors
//! that the bridge consumes, plus the scalar value type shared with the
//! resource layer.

pub mod model;
pub mod schema;
pub mod types;
pub mod value;

pub use model::{MetaData, ModelBase, ModelInstance, ModelType};
pub use schema::{Column, Table};
pub use types::SqlType;
pub use value::Value;

//! Resource-side contracts for tablecast.
//!
//! Described-record resource types, field specifications, mapping objects,
//! the field-resolver protocol used by generic mapping generation, and the
//! registration cache that ties them together.

pub mod errors;
pub mod field;
pub mod mapping;
pub mod registry;
pub mod resource;

pub use errors::{ResourceError, Result};
pub use field::{FieldSpec, FieldType};
pub use mapping::{mapping_factory, Mapping};
pub use registry::{FieldResolver, RegistrationCache};
pub use resource::{ResourceInstance, ResourceType};

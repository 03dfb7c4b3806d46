use std::fmt;

/// Errors raised by the resource layer.
///
/// `Display` and `Error` are implemented by hand because the
/// `MappingNotFound` variant has a field named `source` that is a plain
/// `String`; `#[derive(thiserror::Error)]` would treat it as the error
/// source and require it to implement `std::error::Error`.
#[derive(Debug, PartialEq, Eq)]
pub enum ResourceError {
    /// No field resolver is registered for the model's declarative base.
    NoResolver(String),
    /// The resource type is not present in the registration cache.
    ResourceNotFound(String),
    /// The resource type has no originating model to convert into.
    ModelRequired(String),
    /// No mapping was generated for the requested direction.
    MappingNotFound { source: String, target: String },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResolver(base) => {
                write!(f, "no field resolver registered for base `{base}`")
            }
            Self::ResourceNotFound(name) => write!(f, "resource `{name}` is not registered"),
            Self::ModelRequired(name) => write!(f, "resource `{name}` has no originating model"),
            Self::MappingNotFound { source, target } => {
                write!(f, "no mapping registered from `{source}` to `{target}`")
            }
        }
    }
}

impl std::error::Error for ResourceError {}

/// Convenience alias for results returned by the resource layer.
pub type Result<T> = std::result::Result<T, ResourceError>;

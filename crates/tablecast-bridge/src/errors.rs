use thiserror::Error;

use tablecast_resource::ResourceError;

/// Errors raised by the bridge.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The supplied base lacks the metadata marker of a declarative base.
    #[error("`{0}` does not appear to be a valid declarative base")]
    InvalidBase(String),
    /// The factory source exposes no table.
    #[error("source does not expose a table")]
    NotATable,
    /// Mapping generation needs a declarative model as conversion target.
    #[error("mappings can only be generated for declarative models")]
    MappingsRequireModel,
    /// Failure propagated from the resource layer.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Convenience alias for results returned by the bridge.
pub type Result<T> = std::result::Result<T, BridgeError>;

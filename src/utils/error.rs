use std::io;
use thiserror::Error;

/// Outcomes of a query that are not a result. Unreachable destinations are
/// reported as `Ok(None)` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("topology is not loaded yet")]
    NotReady,
    #[error("device not found: {0:?}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io { path: String, #[source] source: io::Error },
    #[error("failed to parse {path}")]
    Yaml { path: String, #[source] source: serde_yaml::Error },
    #[error("address {address} is bound to {bound}, cannot bind it to {requested}")]
    DuplicateAddress { address: String, bound: String, requested: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("topology is already loaded")]
    AlreadyLoaded,
}

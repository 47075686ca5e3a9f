//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog core.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by the catalog core.
///
/// Keep this focused on the collaborator boundary: transport failures,
/// unexpected payload shapes, and field-level parse failures. Every variant
/// is recoverable by the caller; nothing here should abort the hosting
/// process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The remote resource was unreachable or answered with a non-success
    /// status.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The payload was not shaped as expected (e.g. not a JSON array of
    /// products).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A field could not be interpreted (notably a creation timestamp).
    #[error("parse failure: {0}")]
    ParseFailure(String),
}

impl CatalogError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkFailure(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseFailure(msg.into())
    }
}

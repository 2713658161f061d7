// error.rs — Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur while building a [`crate::Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A name was queried but no artifact in the run carries it.
    #[error("artifact '{0}' not found")]
    ArtifactNotFound(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// error.rs — Error types for a reporting pass.

use thiserror::Error;
use wra_catalog::CatalogError;
use wra_report::{ReportError, TransportError};

/// Errors that abort a reporting pass.
///
/// Every variant is final: the pass never retries or downgrades an error.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The pass was not triggered by a usable `workflow_run` event.
    #[error("{0}")]
    Precondition(String),

    /// The queried artifact name is not in the run.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Mode selection, rendering or the report write failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Listing the run's artifacts failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A step output could not be appended to the output file.
    #[error("failed to write step output '{name}': {source}")]
    Output {
        name: String,
        source: std::io::Error,
    },

    /// A step output collides with its heredoc delimiter.
    #[error("step output '{0}' contains its delimiter")]
    OutputDelimiter(String),

    /// The artifact list could not be serialized.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;

// error.rs — Error types for report dispatch and the GitHub transport.

use thiserror::Error;
use wra_template::TemplateError;

/// Errors that can occur while dispatching a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// `pull_request` mode on a run with no associated pull requests.
    #[error("No pull requests associated with the workflow run")]
    NoPullRequest,

    /// `report-on` is not one of the supported modes.
    #[error("Option \"report-on\" has an invalid value: \"{0}\"")]
    InvalidOption(String),

    /// A report field failed strict rendering.
    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// The outbound write failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Opaque failure from the GitHub transport. Never retried or interpreted.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("{operation} request failed: {message}")]
    Http { operation: String, message: String },

    /// The API answered with a non-success status.
    #[error("{operation} returned HTTP {status}: {body}")]
    Status {
        operation: String,
        status: u16,
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },

    /// The token or another header value is not valid in an HTTP header.
    #[error("invalid request header: {0}")]
    InvalidHeader(String),
}

// error.rs — Error types for template rendering.

use handlebars::{RenderError, RenderErrorReason};
use thiserror::Error;

/// Errors that can occur while rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template text does not compile.
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// A referenced path does not exist in the render context.
    #[error("\"{path}\" not defined in template context")]
    Unresolved { path: String },

    /// Rendering failed for another reason (unknown partial or helper, bad helper argument).
    #[error("{0}")]
    Render(String),

    /// The render context could not be converted to JSON.
    #[error("template context is not serializable: {0}")]
    Context(#[from] serde_json::Error),
}

impl From<RenderError> for TemplateError {
    fn from(err: RenderError) -> Self {
        match err.reason() {
            RenderErrorReason::TemplateError(syntax) => TemplateError::Syntax(syntax.to_string()),
            RenderErrorReason::MissingVariable(path) => TemplateError::Unresolved {
                path: path.clone().unwrap_or_default(),
            },
            _ => TemplateError::Render(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;

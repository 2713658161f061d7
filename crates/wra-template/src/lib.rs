//! # wra-template
//!
//! Strict handlebars rendering for report templates.
//!
//! Templates are rendered with the `handlebars` crate in strict mode:
//!
//! - `{{path.to.value}}` — HTML-escaped substitution
//! - `{{{path}}}` — raw substitution
//! - `{{#if}}`, `{{#each}}`, `{{#with}}`, `{{#unless}}` and `{{else}}` blocks
//!
//! Every referenced path must exist in the context. A missing path fails
//! with [`TemplateError::Unresolved`] instead of rendering empty. No partials
//! are registered, so `{{> name}}` always fails.

pub mod error;
pub mod render;

pub use error::{Result, TemplateError};
pub use render::{render, Renderer};

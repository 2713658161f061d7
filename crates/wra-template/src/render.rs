// render.rs — Strict rendering against a JSON context.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TemplateError};

/// Render `template` against `context`.
///
/// The output is trimmed of leading and trailing whitespace.
pub fn render<T: Serialize + ?Sized>(template: &str, context: &T) -> Result<String> {
    Renderer::new(context)?.render(template)
}

/// A context serialized once and shared by several template renders.
pub struct Renderer {
    registry: Handlebars<'static>,
    context: Value,
}

impl Renderer {
    pub fn new<T: Serialize + ?Sized>(context: &T) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        Ok(Self {
            registry,
            context: serde_json::to_value(context)?,
        })
    }

    pub fn render(&self, template: &str) -> Result<String> {
        let rendered = self
            .registry
            .render_template(template, &self.context)
            .map_err(TemplateError::from)?;
        tracing::debug!(len = rendered.len(), "rendered template");
        Ok(rendered.trim().to_string())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

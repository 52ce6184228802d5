//! Handlebars-based template renderer for project scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled and HTML
//! escaping disabled. Strict mode turns a `{{variable}}` missing from the context into
//! an error instead of an empty string. Escaping is off because the output is Python,
//! TOML and Markdown, where `O'Brien` must stay `O'Brien`.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{ForgeError, Result};

/// Template renderer using Handlebars for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ForgeError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

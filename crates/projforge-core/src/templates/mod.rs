//! Template system for projforge scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every template is rendered against the same [`crate::render::TemplateContext`]:
//! - `{{name}}` — project name, also the directory name
//! - `{{created}}` — `YYYY-MM-DD` creation date, computed once per run
//! - `{{year}}` — the year of `created`, used by license stamps
//! - `{{author}}`, `{{description}}`, `{{runtime_version}}` — answers or placeholders
//! - `{{license_badge}}` — license key as typed, or `Unspecified`
//! - `{{banner}}` — the projforge ASCII banner
//! - `{{venv_dir}}` — virtual environment directory name
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;

//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/projforge-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.

// -------------------------------------------------------
// Python sources
// -------------------------------------------------------

pub const MAIN_PY: &str = include_str!("../../../../templates/python/main.py.tmpl");
pub const CONFIG_PY: &str = include_str!("../../../../templates/python/config.py.tmpl");
pub const CLI_PY: &str = include_str!("../../../../templates/python/cli.py.tmpl");
pub const UTILS_PY: &str = include_str!("../../../../templates/python/utils.py.tmpl");
pub const EXAMPLE_MODULE_PY: &str =
    include_str!("../../../../templates/python/modules/example_module.py.tmpl");
pub const ENTRY_PY: &str = include_str!("../../../../templates/python/entry.py.tmpl");

// -------------------------------------------------------
// Docs and notes
// -------------------------------------------------------

pub const README_MD: &str = include_str!("../../../../templates/python/README.md.tmpl");
pub const PROJECT_NOTES: &str = include_str!("../../../../templates/python/project_notes.txt.tmpl");
pub const VENV_NOTE: &str = include_str!("../../../../templates/python/venv.txt.tmpl");

// -------------------------------------------------------
// Packaging
// -------------------------------------------------------

pub const SETUP_PY: &str = include_str!("../../../../templates/python/setup.py.tmpl");
pub const PYPROJECT_TOML: &str = include_str!("../../../../templates/python/pyproject.toml.tmpl");

// -------------------------------------------------------
// License stubs (not full legal texts)
// -------------------------------------------------------

pub const LICENSE_MIT: &str = include_str!("../../../../templates/licenses/MIT.tmpl");
pub const LICENSE_APACHE_2: &str = include_str!("../../../../templates/licenses/Apache-2.0.tmpl");
pub const LICENSE_GPL_3: &str = include_str!("../../../../templates/licenses/GPL-3.0.tmpl");

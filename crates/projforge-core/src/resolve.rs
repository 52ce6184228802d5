//! Merge command-line values with interactive answers into a [`ProjectSpec`].
//!
//! Precedence is flag > prompt > default. A field supplied on the command line
//! is never prompted for. The name is validated as soon as it is known, so a
//! blank name stops the run before any other question is asked.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::Result;
use crate::project_spec::ProjectSpec;
use crate::prompt::Prompter;

pub const NAME_PROMPT: &str = "📁 Enter your project name";
pub const AUTHOR_PROMPT: &str = "👤 Enter author name [optional]";
pub const DESCRIPTION_PROMPT: &str = "📝 Enter a short project description [optional]";
pub const RUNTIME_PROMPT: &str = "🐍 Target Python version (e.g. 3.10) [default: 3.8]";
pub const LICENSE_PROMPT: &str = "📜 Enter license type (MIT, Apache-2.0, GPL-3.0) [optional]";

/// Values taken from command-line flags (or their environment variables).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub runtime_version: Option<String>,
    pub license: Option<String>,
    pub create_env: bool,
    pub test_mode: bool,
}

/// Produce a fully populated spec, prompting for anything the flags left unset.
pub fn resolve(
    overrides: Overrides,
    prompter: &mut impl Prompter,
    created: NaiveDate,
) -> Result<ProjectSpec> {
    let name = match overrides.name {
        Some(name) => name,
        None => prompter.input(NAME_PROMPT)?,
    };
    let mut spec = ProjectSpec::new(&name, created)?;

    spec.author = answer(overrides.author, prompter, AUTHOR_PROMPT)?;
    spec.description = answer(overrides.description, prompter, DESCRIPTION_PROMPT)?;
    spec.runtime_version = answer(overrides.runtime_version, prompter, RUNTIME_PROMPT)?;
    spec.license_choice = answer(overrides.license, prompter, LICENSE_PROMPT)?;
    spec.create_env = overrides.create_env;
    spec.test_mode = overrides.test_mode;

    debug!(?spec, "resolved project spec");
    Ok(spec)
}

/// Flag value if present, otherwise a prompt; blank answers become `None`.
fn answer(
    flag: Option<String>,
    prompter: &mut impl Prompter,
    prompt: &str,
) -> Result<Option<String>> {
    let raw = match flag {
        Some(value) => value,
        None => prompter.input(prompt)?,
    };
    let trimmed = raw.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

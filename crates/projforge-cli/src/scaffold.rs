//! The end-to-end scaffolding run behind the `projforge` binary.
//!
//! Steps run strictly in order: resolve answers, render, write, optional venv,
//! summary, optional test-mode cleanup. A failure in any step ends the run and
//! leaves files already written in place.

use anyhow::Result;
use tracing::debug;

use projforge_core::defaults;
use projforge_core::project;
use projforge_core::project_spec;
use projforge_core::prompt::Prompter;
use projforge_core::provision;
use projforge_core::render;
use projforge_core::resolve::{self, Overrides};

use crate::output;
use crate::prompt::TerminalPrompter;
use crate::report;
use crate::Cli;

/// Scaffold a new project in the current directory.
///
/// Collects answers, writes the file tree (asking before replacing an existing
/// directory), optionally creates a virtual environment, prints a summary and,
/// in test mode, offers to delete the result.
pub fn run(cli: Cli) -> Result<()> {
    output::print_banner(defaults::BANNER);

    let created = project_spec::today();
    let mut prompter = TerminalPrompter;

    let overrides = Overrides {
        name: cli.name,
        author: cli.author,
        description: cli.description,
        runtime_version: cli.python_version,
        license: cli.license,
        create_env: cli.venv,
        test_mode: cli.test,
    };
    let spec = resolve::resolve(overrides, &mut prompter, created)?;

    let project_dir = std::env::current_dir()?.join(spec.name());
    debug!("target directory {}", project_dir.display());
    output::print_header(&format!("projforge: {}", spec.name()));

    output::print_step(1, 3, "Rendering templates");
    let tree = render::render_project(&spec)?;

    output::print_step(2, 3, &format!("Writing {} files to {}/", tree.len(), spec.name()));
    project::write_project(&project_dir, &tree, |dir| {
        let replace = prompter.confirm(&format!(
            "⚠️ Directory '{}' already exists. Delete and recreate?",
            dir.display()
        ))?;
        if replace {
            output::print_warning("🗑️ Deleting existing directory");
        }
        Ok(replace)
    })?;

    let create_env = spec.create_env
        || prompter.confirm("🐍 Create a virtual environment in this project?")?;

    let env = if create_env {
        output::print_step(3, 3, &format!("Creating virtual environment with {}", cli.python));
        let env = provision::create_venv(&project_dir, &spec, &cli.python)?;
        output::print_success(&format!(
            "Virtual environment created with helper file '{}'",
            defaults::VENV_NOTE
        ));
        Some(env)
    } else {
        output::print_step(3, 3, "Skipping virtual environment");
        None
    };

    report::print_summary(&spec, &project_dir, env.as_ref());

    if spec.test_mode {
        if prompter.confirm("🧪 Delete this test project directory now?")? {
            project::remove_project(&project_dir)?;
            output::print_success("🧹 Deleted test directory");
        } else {
            output::print_key_value("📦 Test directory kept", &project_dir.display().to_string());
        }
    }

    Ok(())
}

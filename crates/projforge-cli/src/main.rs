//! projforge CLI — scaffold a modular Python project folder.
//!
//! Resolves the project answers from flags and prompts, renders the fixed file
//! set, writes it under `./<name>/`, and optionally creates a virtual
//! environment. See [`projforge_core`] for the pipeline itself.

mod output;
mod prompt;
mod report;
mod scaffold;

use std::process::ExitCode;

use clap::Parser;

use projforge_core::defaults;
use projforge_core::error::ForgeError;

#[derive(Parser, Debug)]
#[command(
    name = "projforge",
    about = "🛠️  Python Project Generator",
    version,
    before_help = defaults::BANNER,
    after_help = "Example:\n  projforge --name myapp --venv --author \"Jane Doe\" --license MIT"
)]
pub struct Cli {
    /// Set project name (will prompt if not provided)
    #[arg(long)]
    name: Option<String>,

    /// Create a Python virtual environment without asking
    #[arg(long)]
    venv: bool,

    /// Enable test mode (project will prompt for deletion after)
    #[arg(long)]
    test: bool,

    /// Author added to setup.py, pyproject.toml and LICENSE
    #[arg(long, env = "PROJFORGE_AUTHOR")]
    author: Option<String>,

    /// Short project description
    #[arg(long)]
    description: Option<String>,

    /// Target Python version used in README badge and requires-python
    #[arg(long, value_name = "VERSION")]
    python_version: Option<String>,

    /// Add license (MIT, Apache-2.0, GPL-3.0); other values skip LICENSE
    #[arg(long, env = "PROJFORGE_LICENSE")]
    license: Option<String>,

    /// Interpreter used to create the virtual environment
    #[arg(long, env = "PROJFORGE_PYTHON", default_value = defaults::INTERPRETER)]
    python: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match scaffold::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<ForgeError>().is_some_and(ForgeError::is_user_abort) => {
            output::print_error("Aborting setup.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

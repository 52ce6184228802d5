//! Built-in fallbacks and static data shared by every run.
//!
//! Any optional answer left blank is replaced by one of these values at render
//! time, so generated files never contain empty interpolations.

/// Tool version reported by `--version`.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Author placeholder.
pub const AUTHOR: &str = "Your Name";

/// Description placeholder.
pub const DESCRIPTION: &str = "Replace this with a short project description.";

/// Python version used in the README badge and `requires-python`.
pub const RUNTIME_VERSION: &str = "3.8";

/// License badge label when no license was chosen.
pub const LICENSE_BADGE: &str = "Unspecified";

/// Interpreter invoked to create the virtual environment.
pub const INTERPRETER: &str = "python3";

/// Virtual environment directory, relative to the project root.
pub const VENV_DIR: &str = ".venv";

/// Helper note written next to the virtual environment.
pub const VENV_NOTE: &str = "venv.txt";

/// Python package directory created inside every project.
pub const PACKAGE_DIR: &str = "modules";

/// Banner printed by the CLI and embedded in every README.
pub const BANNER: &str = include_str!("../../../templates/banner.txt");

/// Starter prompts for an AI assistant, written to `gpt_prompts.txt`.
pub const ASSISTANT_PROMPTS: [&str; 10] = [
    "Generate a complete `config.py` with constants, default settings, and comments.",
    "Review all files for consistent style and unused imports. Suggest cleanups.",
    "Check `modules/` for missing `__init__.py`, circular imports, or unused modules.",
    "Simulate a CLI user session and validate argument parsing in `cli.py`.",
    "Help me structure `main.py` to support both daemon mode and CLI mode.",
    "Create a test file for `utils.py` using `pytest`, with coverage for all functions.",
    "Generate a `logger.py` module that supports file+console output with rotating logs.",
    "Review `.project_manifest.json` and generate a system diagram from its data.",
    "Create a Markdown changelog from recent commits or `project_notes.txt`.",
    "Summarize this entire codebase for onboarding a new developer.",
];

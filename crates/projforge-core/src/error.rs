//! Unified error types for projforge.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum ForgeError {
    // --- Input ---

    /// The project name was missing or blank after trimming.
    #[error("project name required")]
    EmptyName,

    /// The user declined to replace an existing project directory.
    #[error("aborted: directory {} already exists and was kept", path.display())]
    Aborted { path: PathBuf },

    /// An interactive prompt could not be read (closed stdin, no TTY).
    #[error("prompt failed: {0}")]
    Prompt(String),

    // --- Environment ---

    /// The interpreter used to create the virtual environment is not on `PATH`.
    #[error("required tool '{name}' not found — install: {install}")]
    MissingTool { name: String, install: String },

    /// `<python> -m venv` exited unsuccessfully.
    #[error("virtual environment creation with '{interpreter}' failed ({status}): {stderr}")]
    Provision {
        interpreter: String,
        status: ExitStatus,
        stderr: String,
    },

    // --- Rendering ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// The project manifest could not be serialized.
    #[error("failed to serialize project manifest")]
    Manifest(#[source] serde_json::Error),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ForgeError {
    /// Whether this error is a deliberate "no" from the user rather than a failure.
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}

/// Alias for `Result<T, ForgeError>`.
pub type Result<T> = std::result::Result<T, ForgeError>;

//! Virtual environment creation via `<python> -m venv`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::defaults;
use crate::error::{ForgeError, Result};
use crate::project_spec::ProjectSpec;
use crate::render::render_venv_note;
use crate::version::{detect_version, Version};

/// What [`create_venv`] produced.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub venv_dir: PathBuf,
    pub note: PathBuf,
    /// Interpreter version, when it could be detected.
    pub interpreter_version: Option<Version>,
}

/// Create `<project_dir>/.venv` with `interpreter` and write `venv.txt` beside it.
///
/// A missing interpreter or a non-zero exit is fatal. Files already written to
/// the project stay in place.
pub fn create_venv(project_dir: &Path, spec: &ProjectSpec, interpreter: &str) -> Result<Provisioned> {
    which::which(interpreter).map_err(|_| ForgeError::MissingTool {
        name: interpreter.to_string(),
        install: "https://www.python.org/downloads/".into(),
    })?;

    let interpreter_version = detect_version(interpreter);
    match interpreter_version {
        Some(v) => info!("using {interpreter} {v}"),
        None => warn!("could not detect {interpreter} version"),
    }

    let venv_dir = project_dir.join(defaults::VENV_DIR);
    let output = Command::new(interpreter)
        .args(["-m", "venv"])
        .arg(&venv_dir)
        .output()?;

    if !output.status.success() {
        return Err(ForgeError::Provision {
            interpreter: interpreter.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let note = project_dir.join(defaults::VENV_NOTE);
    fs::write(&note, render_venv_note(spec)?)?;

    Ok(Provisioned {
        venv_dir,
        note,
        interpreter_version,
    })
}

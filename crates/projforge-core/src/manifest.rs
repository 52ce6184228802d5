//! The `.project_manifest.json` summary file.
//!
//! Schema: `{"name": string, "created": "YYYY-MM-DD", "modules": [string, ...]}`.
//! `modules` is the fixed [`MODULES`] list, not a scan of what was written.

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};
use crate::project_spec::ProjectSpec;

pub const MANIFEST_FILE: &str = ".project_manifest.json";

/// Entries listed under `modules`. Keep in step with the renderer's output.
pub const MODULES: [&str; 5] = ["main.py", "config.py", "cli.py", "utils.py", "modules/"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub created: String,
    pub modules: Vec<String>,
}

impl Manifest {
    pub fn for_project(spec: &ProjectSpec) -> Self {
        Self {
            name: spec.name().to_string(),
            created: spec.created_str(),
            modules: MODULES.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ForgeError::Manifest)
    }
}

//! The resolved answers that drive every generated file.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::defaults;
use crate::error::{ForgeError, Result};

/// Today's local date. Call once per run and pass the result along.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// License stubs projforge knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
}

impl License {
    pub const ALL: [License; 3] = [Self::Mit, Self::Apache2, Self::Gpl3];

    /// Match a key exactly as typed. `mit` or `apache-2.0` are not recognized.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "MIT" => Some(Self::Mit),
            "Apache-2.0" => Some(Self::Apache2),
            "GPL-3.0" => Some(Self::Gpl3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render a project, collected before anything touches disk.
///
/// Optional answers are stored as `None` when left blank; the `*_or_default`
/// accessors substitute the placeholders from [`defaults`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub runtime_version: Option<String>,
    /// License key as typed. Unknown keys are kept for the README badge but
    /// produce no `LICENSE` file.
    pub license_choice: Option<String>,
    /// Computed once per run and shared by every template.
    pub created: NaiveDate,
    pub create_env: bool,
    pub test_mode: bool,
}

impl ProjectSpec {
    /// Build a spec with only a name and date; everything else falls back to defaults.
    ///
    /// Fails with [`ForgeError::EmptyName`] if `name` is blank after trimming.
    pub fn new(name: &str, created: NaiveDate) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ForgeError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            author: None,
            description: None,
            runtime_version: None,
            license_choice: None,
            created,
            create_env: false,
            test_mode: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or(defaults::AUTHOR)
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(defaults::DESCRIPTION)
    }

    pub fn runtime_version_or_default(&self) -> &str {
        self.runtime_version
            .as_deref()
            .unwrap_or(defaults::RUNTIME_VERSION)
    }

    pub fn license_badge(&self) -> &str {
        self.license_choice
            .as_deref()
            .unwrap_or(defaults::LICENSE_BADGE)
    }

    /// The known license matching `license_choice`, if any.
    pub fn license(&self) -> Option<License> {
        self.license_choice.as_deref().and_then(License::from_key)
    }

    /// `YYYY-MM-DD`
    pub fn created_str(&self) -> String {
        self.created.format("%Y-%m-%d").to_string()
    }

    pub fn created_year(&self) -> i32 {
        self.created.year()
    }
}

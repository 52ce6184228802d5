//! Interpreter version detection.
//!
//! Only used for reporting. If the interpreter prints something unexpected,
//! detection returns `None` and the run continues.

use std::fmt;
use std::process::Command;

/// A `major.minor.patch` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Parse the first `X.Y.Z` found in a string, e.g. `"Python 3.11.4"`.
    ///
    /// Trailing release tags on the patch component (`3.13.0rc1`) are dropped.
    pub fn parse(s: &str) -> Option<Self> {
        s.split_whitespace()
            .filter(|word| word.starts_with(|c: char| c.is_ascii_digit()))
            .find_map(Self::parse_word)
    }

    fn parse_word(word: &str) -> Option<Self> {
        let mut parts = word.splitn(3, '.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch_part = parts.next()?;
        let digits = patch_part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(patch_part.len());
        let patch = patch_part[..digits].parse().ok()?;
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Run `<interpreter> --version` and parse the output.
///
/// Python 2 printed its version on stderr, so both streams are checked.
pub fn detect_version(interpreter: &str) -> Option<Version> {
    let output = Command::new(interpreter).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Version::parse(&stdout).or_else(|| Version::parse(&String::from_utf8_lossy(&output.stderr)))
}

//! Writing a rendered project to disk.
//!
//! ## Directory layout
//!
//! ```text
//! <name>/
//! ├── main.py, cli.py, utils.py, <name>.py   # executable
//! ├── config.py, setup.py, pyproject.toml
//! ├── README.md, LICENSE (optional), project_notes.txt, gpt_prompts.txt
//! ├── requirements.txt, .project_manifest.json
//! └── modules/
//!     ├── __init__.py
//!     └── example_module.py
//! ```
//!
//! There is no rollback: an I/O error midway leaves whatever was already written.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::defaults;
use crate::error::{ForgeError, Result};
use crate::render::RenderedTree;

/// Write `tree` under `project_dir`.
///
/// If `project_dir` already exists, `confirm_replace` is asked whether to delete it.
/// On `false` nothing is touched and [`ForgeError::Aborted`] is returned; on `true`
/// the directory is removed recursively and recreated from scratch.
pub fn write_project<F>(project_dir: &Path, tree: &RenderedTree, confirm_replace: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if project_dir.exists() {
        if !confirm_replace(project_dir)? {
            return Err(ForgeError::Aborted {
                path: project_dir.to_path_buf(),
            });
        }
        info!("removing existing directory {}", project_dir.display());
        fs::remove_dir_all(project_dir)?;
    }

    fs::create_dir_all(project_dir.join(defaults::PACKAGE_DIR))?;

    for file in tree.files() {
        let path = project_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.contents)?;
        if file.executable {
            make_executable(&path)?;
        }
        debug!("wrote {}", path.display());
    }

    Ok(())
}

/// Add the execute bits to whatever permissions the file already has.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Recursively delete a project directory (test-mode cleanup).
pub fn remove_project(project_dir: &Path) -> Result<()> {
    fs::remove_dir_all(project_dir)?;
    info!("deleted {}", project_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_spec::ProjectSpec;
    use crate::render::render_project;
    use chrono::NaiveDate;

    fn tree(license: Option<&str>) -> RenderedTree {
        let mut spec =
            ProjectSpec::new("demo", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
        spec.author = Some("Ann".into());
        spec.license_choice = license.map(String::from);
        render_project(&spec).unwrap()
    }

    fn never_asked(_: &Path) -> Result<bool> {
        panic!("confirmation requested for a fresh directory");
    }

    #[test]
    fn test_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        let tree = tree(Some("MIT"));

        write_project(&project, &tree, never_asked).unwrap();

        for file in tree.files() {
            let written = fs::read_to_string(project.join(&file.path)).unwrap();
            assert_eq!(written, file.contents);
        }
        let license = fs::read_to_string(project.join("LICENSE")).unwrap();
        assert!(license.contains("Ann"));
        assert!(license.contains("2025"));
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        let tree = tree(None);
        write_project(&project, &tree, never_asked).unwrap();

        for file in tree.files() {
            let mode = fs::metadata(project.join(&file.path))
                .unwrap()
                .permissions()
                .mode();
            if file.executable {
                assert_eq!(mode & 0o111, 0o111, "{} not executable", file.path.display());
                assert_ne!(mode & 0o600, 0, "{} lost read/write bits", file.path.display());
            } else {
                assert_eq!(mode & 0o111, 0, "{} executable", file.path.display());
            }
        }
    }

    #[test]
    fn test_declined_replace_leaves_directory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("keep.txt"), "old").unwrap();

        let err = write_project(&project, &tree(None), |_| Ok(false)).unwrap_err();

        assert!(err.is_user_abort());
        let entries: Vec<_> = fs::read_dir(&project).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(project.join("keep.txt")).unwrap(), "old");
    }

    #[test]
    fn test_accepted_replace_removes_old_contents() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::create_dir_all(project.join("stale")).unwrap();
        fs::write(project.join("stale/old.txt"), "old").unwrap();

        let mut asked = false;
        write_project(&project, &tree(None), |_| {
            asked = true;
            Ok(true)
        })
        .unwrap();

        assert!(asked);
        assert!(!project.join("stale").exists());
        assert!(project.join("main.py").exists());
        assert!(project.join("modules/example_module.py").exists());
    }

    #[test]
    fn test_confirmation_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::create_dir(&project).unwrap();

        let err = write_project(&project, &tree(None), |_| {
            Err(ForgeError::Prompt("stdin closed".into()))
        })
        .unwrap_err();

        assert!(matches!(err, ForgeError::Prompt(_)));
        assert!(project.exists());
    }

    #[test]
    fn test_remove_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");
        write_project(&project, &tree(None), never_asked).unwrap();

        remove_project(&project).unwrap();
        assert!(!project.exists());
    }
}

//! Map a [`ProjectSpec`] to the files of a new project.
//!
//! Rendering is pure: no clock reads, no filesystem access. The output set is
//! fixed apart from `LICENSE`, which is present only for a known license key.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::defaults;
use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::project_spec::{License, ProjectSpec};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// One file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
    pub executable: bool,
}

/// Ordered set of rendered files.
#[derive(Debug, Clone, Default)]
pub struct RenderedTree {
    files: Vec<RenderedFile>,
}

impl RenderedTree {
    fn push(&mut self, path: impl Into<PathBuf>, contents: String, executable: bool) {
        self.files.push(RenderedFile {
            path: path.into(),
            contents,
            executable,
        });
    }

    pub fn files(&self) -> &[RenderedFile] {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&RenderedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path.as_path() == path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Variables visible to every template.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    pub name: &'a str,
    pub created: String,
    pub year: i32,
    pub author: &'a str,
    pub description: &'a str,
    pub runtime_version: &'a str,
    pub license_badge: &'a str,
    pub banner: &'a str,
    pub venv_dir: &'a str,
}

impl<'a> TemplateContext<'a> {
    pub fn new(spec: &'a ProjectSpec) -> Self {
        Self {
            name: spec.name(),
            created: spec.created_str(),
            year: spec.created_year(),
            author: spec.author_or_default(),
            description: spec.description_or_default(),
            runtime_version: spec.runtime_version_or_default(),
            license_badge: spec.license_badge(),
            banner: defaults::BANNER.trim_end(),
            venv_dir: defaults::VENV_DIR,
        }
    }
}

fn license_template(license: License) -> &'static str {
    match license {
        License::Mit => embedded::LICENSE_MIT,
        License::Apache2 => embedded::LICENSE_APACHE_2,
        License::Gpl3 => embedded::LICENSE_GPL_3,
    }
}

/// Render every file of the project.
pub fn render_project(spec: &ProjectSpec) -> Result<RenderedTree> {
    let renderer = TemplateRenderer::new();
    let ctx = TemplateContext::new(spec);
    let mut tree = RenderedTree::default();

    let package = Path::new(defaults::PACKAGE_DIR);

    tree.push("main.py", renderer.render(embedded::MAIN_PY, &ctx)?, true);
    tree.push("config.py", renderer.render(embedded::CONFIG_PY, &ctx)?, false);
    tree.push("cli.py", renderer.render(embedded::CLI_PY, &ctx)?, true);
    tree.push("utils.py", renderer.render(embedded::UTILS_PY, &ctx)?, true);
    tree.push(package.join("__init__.py"), String::new(), false);
    tree.push(
        package.join("example_module.py"),
        renderer.render(embedded::EXAMPLE_MODULE_PY, &ctx)?,
        false,
    );
    tree.push("requirements.txt", String::new(), false);
    tree.push(
        "project_notes.txt",
        renderer.render(embedded::PROJECT_NOTES, &ctx)?,
        false,
    );
    tree.push("gpt_prompts.txt", defaults::ASSISTANT_PROMPTS.join("\n"), false);
    tree.push("README.md", renderer.render(embedded::README_MD, &ctx)?, false);

    match (spec.license(), spec.license_choice.as_deref()) {
        (Some(license), _) => tree.push(
            "LICENSE",
            renderer.render(license_template(license), &ctx)?,
            false,
        ),
        (None, Some(key)) => debug!("unknown license '{key}', skipping LICENSE"),
        (None, None) => {}
    }

    tree.push("setup.py", renderer.render(embedded::SETUP_PY, &ctx)?, false);
    tree.push(
        "pyproject.toml",
        renderer.render(embedded::PYPROJECT_TOML, &ctx)?,
        false,
    );
    tree.push(MANIFEST_FILE, Manifest::for_project(spec).to_json()?, false);
    tree.push(
        format!("{}.py", spec.name()),
        renderer.render(embedded::ENTRY_PY, &ctx)?,
        true,
    );

    Ok(tree)
}

/// Render the `venv.txt` helper written after the environment is created.
pub fn render_venv_note(spec: &ProjectSpec) -> Result<String> {
    TemplateRenderer::new().render(embedded::VENV_NOTE, &TemplateContext::new(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::MODULES;
    use chrono::NaiveDate;

    fn spec(license: Option<&str>) -> ProjectSpec {
        let mut spec =
            ProjectSpec::new("demo", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
        spec.author = Some("Ann".into());
        spec.license_choice = license.map(String::from);
        spec
    }

    const FIXED_FILES: [&str; 14] = [
        "main.py",
        "config.py",
        "cli.py",
        "utils.py",
        "modules/__init__.py",
        "modules/example_module.py",
        "requirements.txt",
        "project_notes.txt",
        "gpt_prompts.txt",
        "README.md",
        "setup.py",
        "pyproject.toml",
        ".project_manifest.json",
        "demo.py",
    ];

    #[test]
    fn test_fixed_file_set_without_license() {
        let tree = render_project(&spec(None)).unwrap();
        for path in FIXED_FILES {
            assert!(tree.get(path).is_some(), "missing {path}");
        }
        assert!(tree.get("LICENSE").is_none());
        assert_eq!(tree.len(), FIXED_FILES.len());
    }

    #[test]
    fn test_license_only_for_known_keys() {
        for key in ["MIT", "Apache-2.0", "GPL-3.0"] {
            let tree = render_project(&spec(Some(key))).unwrap();
            let license = tree.get("LICENSE").expect("license rendered");
            assert!(license.contents.contains("Ann"));
            assert!(license.contents.contains("2025"));
            assert!(license.contents.ends_with("Truncated]"));
        }
        for key in ["mit", "BSD-3-Clause", "gpl-3.0"] {
            let tree = render_project(&spec(Some(key))).unwrap();
            assert!(tree.get("LICENSE").is_none(), "unexpected license for {key}");
        }
    }

    #[test]
    fn test_executable_flags() {
        let tree = render_project(&spec(None)).unwrap();
        let executable: Vec<_> = tree
            .files()
            .iter()
            .filter(|f| f.executable)
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(executable, ["main.py", "cli.py", "utils.py", "demo.py"]);
    }

    #[test]
    fn test_created_date_consistent() {
        let tree = render_project(&spec(None)).unwrap();
        let manifest: Manifest =
            serde_json::from_str(&tree.get(MANIFEST_FILE).unwrap().contents).unwrap();
        assert_eq!(manifest.created, "2025-06-01");

        for path in ["README.md", "main.py", "demo.py", "config.py"] {
            let contents = &tree.get(path).unwrap().contents;
            assert!(contents.contains(&manifest.created), "{path} lacks date");
        }
    }

    #[test]
    fn test_manifest_modules_are_rendered() {
        let tree = render_project(&spec(None)).unwrap();
        for module in MODULES {
            let found = match module.strip_suffix('/') {
                Some(dir) => tree.files().iter().any(|f| f.path.starts_with(dir)),
                None => tree.get(module).is_some(),
            };
            assert!(found, "manifest lists {module} but it is not rendered");
        }
    }

    #[test]
    fn test_placeholders_and_badges() {
        let mut spec = spec(None);
        spec.author = None;
        let tree = render_project(&spec).unwrap();

        let readme = &tree.get("README.md").unwrap().contents;
        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("badge/python-3.8-blue"));
        assert!(readme.contains("badge/license-Unspecified-lightgrey"));
        assert!(readme.contains("Python Project Builder"));

        let setup = &tree.get("setup.py").unwrap().contents;
        assert!(setup.contains("author=\"Your Name\""));
        assert!(setup.contains("Replace this with a short project description."));
        assert!(setup.contains("\"demo = demo:main\""));

        let pyproject = &tree.get("pyproject.toml").unwrap().contents;
        assert!(pyproject.contains("requires-python = \">=3.8\""));
        assert!(pyproject.contains("authors = [{ name = \"Your Name\" }]"));
        assert!(pyproject.contains("[project.scripts]\ndemo = \"demo:main\"\n"));
    }

    #[test]
    fn test_static_files() {
        let tree = render_project(&spec(None)).unwrap();
        assert_eq!(tree.get("requirements.txt").unwrap().contents, "");
        assert_eq!(tree.get("modules/__init__.py").unwrap().contents, "");

        let prompts = &tree.get("gpt_prompts.txt").unwrap().contents;
        assert_eq!(prompts.lines().count(), 10);
    }

    #[test]
    fn test_entry_file_greets() {
        let tree = render_project(&spec(None)).unwrap();
        let entry = &tree.get("demo.py").unwrap().contents;
        assert!(entry.starts_with("#!/usr/bin/env python3\n"));
        assert!(entry.contains("def main():"));
        assert!(entry.contains("print(\"Hello from demo!\")"));
    }

    #[test]
    fn test_venv_note() {
        let note = render_venv_note(&spec(None)).unwrap();
        assert!(note.starts_with("# Virtual Environment for demo\nCreated: 2025-06-01\n"));
        assert!(note.contains("source .venv/bin/activate"));
    }
}

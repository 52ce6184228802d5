//! End-of-run summary.

use std::path::Path;

use console::style;

use projforge_core::defaults;
use projforge_core::project_spec::ProjectSpec;
use projforge_core::provision::Provisioned;

use crate::output;

/// Print what was created and how to start working in it.
pub fn print_summary(spec: &ProjectSpec, project_dir: &Path, env: Option<&Provisioned>) {
    println!();
    output::print_success("🎉 Project setup complete!");
    output::print_key_value("Name", spec.name());
    output::print_key_value("Created", &spec.created_str());
    match spec.license() {
        Some(license) => output::print_key_value("License", license.as_str()),
        None => output::print_key_value("License", "none"),
    }
    if let Some(version) = env.and_then(|e| e.interpreter_version) {
        output::print_key_value("Python", &version.to_string());
    }
    println!();

    let activate = format!("source {}/bin/activate  # macOS/Linux", defaults::VENV_DIR);
    let activate_win = format!("{}\\Scripts\\activate  # Windows", defaults::VENV_DIR);
    let create = format!("python3 -m venv {}", defaults::VENV_DIR);

    if env.is_some() {
        print_section(
            "🔧 To get started:",
            &[
                "1. Activate your virtual environment:",
                &format!("   {activate}"),
                &format!("   {activate_win}"),
                "",
                "2. Install requirements:",
                "   pip install -r requirements.txt",
            ],
        );
    } else {
        print_section(
            "🔧 To get started:",
            &[
                "1. (Optional) Create and activate a virtual environment",
                &format!("   {create}"),
                &format!("   {activate}"),
                &format!("   {activate_win}"),
                "",
                "2. Install requirements:",
                "   pip install -r requirements.txt",
            ],
        );
    }

    print_section(
        "📘 Next Steps:",
        &[
            "- Run your app:     python3 main.py",
            "- Explore README:   ./README.md",
            "- Review prompts:   ./gpt_prompts.txt",
            "- Track ideas:      ./project_notes.txt",
            "- Add Git:          git init && git add . && git commit -m 'Initial commit'",
        ],
    );

    println!("💡 Tip: You can use --name, --venv, --author, and --license to customize your setup.");
    println!();
    output::print_key_value("📁 Project created at", &project_dir.display().to_string());
}

/// Magenta title, then each line indented, then a blank line.
fn print_section(title: &str, lines: &[&str]) {
    println!("{}", style(title).magenta().bold());
    for line in lines {
        println!("  {line}");
    }
    println!();
}

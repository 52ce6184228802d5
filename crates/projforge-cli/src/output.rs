//! Colored status lines for the projforge CLI.
//!
//! Everything goes to stdout through [`console`], which drops the colors when
//! stdout is not a terminal, so tagged lines stay greppable in scripts.

use console::{style, StyledObject};

fn print_tagged(tag: StyledObject<&str>, text: &str) {
    println!("{} {text}", tag.bold());
}

pub fn print_banner(banner: &str) {
    println!("{}", style(banner).cyan().bold());
}

/// Bold cyan title underlined to its display width (emoji count as two columns).
pub fn print_header(text: &str) {
    let rule = "=".repeat(console::measure_text_width(text));
    println!("\n{}\n{}", style(text).bold().cyan(), style(rule).dim());
}

pub fn print_success(text: &str) {
    print_tagged(style("[OK]").green(), text);
}

pub fn print_warning(text: &str) {
    print_tagged(style("[WARN]").yellow(), text);
}

pub fn print_error(text: &str) {
    print_tagged(style("[ERROR]").red(), text);
}

/// `[2/3] Writing 14 files to demo/`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {text}", style(format!("[{step}/{total}]")).dim());
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {value}", style(key).dim());
}

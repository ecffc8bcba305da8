//! Terminal output helpers for CLI commands.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print the application header with name and version.
pub fn header(version: &str) {
    println!("{} {}", "marginbell".bold(), version.dimmed());
}

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<14} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a hint line.
pub fn hint(message: &str) {
    println!("  {} {}", "hint:".cyan(), message);
}

//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: hints
//!
//! Secret values go through [`secret`], which only appends a newline when
//! stdout is a terminal so piped output stays byte-exact.

use colored::Colorize;
use std::io::{self, Write as IoWrite};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created example.org/jane`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret does not exist: example.org/jane`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan) to stderr.
///
/// Example: `→ run: vault init <keyid>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print one listing line, always newline-terminated.
pub fn line(text: &str) {
    println!("{}", text);
}

/// Print a secret value: trailing newlines stripped, a single newline
/// appended only on a terminal (or when `force_newline` is set, for
/// multi-value output).
pub fn secret(text: &str, force_newline: bool) {
    let trimmed = text.trim_end_matches(|c| c == '\n' || c == '\r');
    print!("{}", trimmed);
    if force_newline || atty::is(atty::Stream::Stdout) {
        println!();
    }
    let _ = io::stdout().flush();
}

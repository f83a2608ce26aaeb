//! Interactive secret picker.
//!
//! Drives fzf twice: once over the secret names under a sub-tree, then over
//! the attribute keys of the chosen secret. The selected values are printed,
//! so the command composes with pipes the same way `show` does.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::cli::output;
use crate::config::Config;
use crate::core::format;
use crate::error::{Error, Result};

/// Options passed to every fzf invocation.
const FZF_OPTS: &[&str] = &["--layout", "reverse"];

/// Pick a secret, then attributes of it, and print the chosen values.
pub fn select(config: &Config, subdir: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    let base = store.subdir_path(subdir)?;
    let names = store.secrets_under(&base)?;

    let Some(name) = pick(&names.join("\n"), false)?.into_iter().next() else {
        return Ok(());
    };

    let plaintext = store.load(&name)?;
    let text = std::str::from_utf8(&plaintext)?;
    let attrs = format::attributes(text);

    let key_lines: Vec<&str> = attrs.iter().map(|(key, _)| *key).collect();
    let picked = pick(&key_lines.join("\n"), true)?;

    for key in &picked {
        let value = format::lookup(text, key)?;
        output::secret(value, picked.len() > 1);
    }
    Ok(())
}

/// Run fzf over newline-separated candidates and return the chosen lines.
fn pick(candidates: &str, multi: bool) -> Result<Vec<String>> {
    which::which("fzf").map_err(|_| Error::DependencyMissing("fzf".to_string()))?;

    debug!(multi, "launching fzf");
    let mut child = Command::new("fzf")
        .arg(if multi { "--multi" } else { "--no-multi" })
        .args(FZF_OPTS)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(candidates.as_bytes())?;
    }
    let output = child.wait_with_output()?;
    // fzf exits 130 when the user cancels
    if !output.status.success() {
        return Err(Error::ToolFailed(format!("fzf exited {}", output.status)));
    }

    let text = std::str::from_utf8(&output.stdout)?;
    Ok(text.lines().map(str::to_string).collect())
}

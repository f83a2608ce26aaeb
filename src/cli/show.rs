//! Attribute extraction commands: show, clip, type.
//!
//! `show` prints the value; `clip` and `type` hand it to the graphical
//! session instead, so the secret never lands in shell history or scrollback.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::config::{Config, Session};
use crate::core::format;
use crate::error::{Error, Result};

/// Print the password (no key) or one attribute of a secret.
pub fn show(config: &Config, name: &str, key: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    let plaintext = store.load(name)?;
    let text = std::str::from_utf8(&plaintext)?;
    let value = match key {
        Some(key) => format::lookup(text, key)?,
        None => format::primary(text),
    };
    output::secret(value, false);
    Ok(())
}

/// Place secret values on the clipboard and clear them after a timeout.
///
/// Without keys the whole decrypted content is copied; with keys the values
/// are joined by newlines.
pub fn clip(config: &Config, name: &str, keys: &[String], timeout: Option<u64>) -> Result<()> {
    let timeout = timeout.unwrap_or(config.clipboard_timeout);
    let value = fetch(config, name, keys, '\n')?;

    match config.session {
        Some(Session::Wayland) => {
            run_with_input("wl-copy", &[], &value)?;
            spawn_clear(&format!("sleep {timeout}; wl-copy --clear"))?;
        }
        Some(Session::X11) => {
            run_with_input("xclip", &["-selection", "clipboard"], &value)?;
            spawn_clear(&format!(
                "sleep {timeout}; printf '' | xclip -selection clipboard"
            ))?;
        }
        None => return Err(Error::UnsupportedSession),
    }

    output::success(&format!("copied to clipboard, clearing in {timeout}s"));
    Ok(())
}

/// Type secret values via synthetic keystrokes after a delay.
///
/// Without keys the whole decrypted content is typed; with keys the values
/// are joined by tabs, so they land in consecutive form fields.
pub fn type_out(config: &Config, name: &str, keys: &[String], delay: Option<u64>) -> Result<()> {
    let delay = delay.unwrap_or(config.keyboard_delay);
    let value = fetch(config, name, keys, '\t')?;

    if config.session != Some(Session::X11) {
        return Err(Error::UnsupportedSession);
    }
    which::which("xdotool").map_err(|_| Error::DependencyMissing("xdotool".to_string()))?;

    // running setxkbmap before xdotool works around a bug in xdotool,
    // see https://github.com/jordansissel/xdotool/issues/49
    let _ = Command::new("setxkbmap").status();

    std::thread::sleep(std::time::Duration::from_secs(delay));
    run_with_input("xdotool", &["type", "--clearmodifiers", "--file", "-"], &value)?;
    Ok(())
}

/// Decrypt the secret and extract the requested values.
fn fetch(config: &Config, name: &str, keys: &[String], sep: char) -> Result<Zeroizing<String>> {
    let store = super::open_store(config);
    let plaintext = store.load(name)?;
    let text = std::str::from_utf8(&plaintext)?;
    Ok(Zeroizing::new(extract(text, keys, sep)?))
}

/// Values for the requested keys joined by `sep`, or the whole text when no
/// keys are given.
fn extract(text: &str, keys: &[String], sep: char) -> Result<String> {
    if keys.is_empty() {
        return Ok(text.to_string());
    }
    let mut values = Vec::with_capacity(keys.len());
    for key in keys {
        values.push(format::lookup(text, key)?);
    }
    Ok(values.join(&sep.to_string()))
}

/// Run a tool with the value on its stdin, waiting for it to finish.
fn run_with_input(tool: &str, args: &[&str], input: &str) -> Result<()> {
    which::which(tool).map_err(|_| Error::DependencyMissing(tool.to_string()))?;

    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }
    let status = child.wait()?;
    if !status.success() {
        return Err(Error::ToolFailed(format!("{tool} exited {status}")));
    }
    Ok(())
}

/// Detach a shell that clears the clipboard later; it outlives this process.
fn spawn_clear(script: &str) -> Result<()> {
    debug!(script, "scheduling clipboard clear");
    Command::new("sh")
        .args(["-c", script])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

//! Process configuration.
//!
//! All settings come from `VAULT_*` environment variables with documented
//! defaults. The [`Config`] is built once in `main` and passed by reference
//! into commands; nothing below the CLI layer reads ambient environment.

use std::path::PathBuf;

/// Default password alphabet: ASCII letters and digits.
pub const DEFAULT_PASSWORD_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default generated password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 32;

/// Default number of diceware words in a passphrase.
pub const DEFAULT_PASSPHRASE_WORDS: usize = 6;

/// Default seconds before the clipboard is cleared.
pub const DEFAULT_CLIPBOARD_TIMEOUT: u64 = 15;

/// Default seconds to wait before typing a secret.
pub const DEFAULT_KEYBOARD_DELAY: u64 = 2;

/// Graphical session kind, detected from the environment at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Wayland,
    X11,
}

/// Runtime settings, resolved once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage root holding secrets and `.gpg-id` files (`VAULT_STORAGE`).
    pub storage: PathBuf,
    /// Directory for editor scratch files (`VAULT_TEMP`).
    pub temp: PathBuf,
    /// Wordlist cache directory (`$XDG_CACHE_HOME/vault`).
    pub cache: PathBuf,
    /// Seconds before the clipboard auto-clears (`VAULT_CLIPBOARD_TIMEOUT`).
    pub clipboard_timeout: u64,
    /// Seconds to wait before keyboard injection (`VAULT_KEYBOARD_DELAY`).
    pub keyboard_delay: u64,
    /// Password alphabet (`VAULT_PASSWORD_CHARSET`).
    pub password_charset: String,
    /// Password length (`VAULT_PASSWORD_LENGTH`).
    pub password_length: usize,
    /// Passphrase word count (`VAULT_PASSPHRASE_LENGTH`).
    pub passphrase_words: usize,
    /// Editor program (`VAULT_EDITOR`, then `EDITOR`, then `vi`).
    pub editor: String,
    /// Detected graphical session, if any.
    pub session: Option<Session>,
}

impl Config {
    /// Resolve all settings from the environment.
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        let storage = env_var("VAULT_STORAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".vault"));

        let temp = env_var("VAULT_TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(default_temp_dir);

        let cache = env_var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".cache"))
            .join("vault");

        let editor = env_var("VAULT_EDITOR")
            .or_else(|| env_var("EDITOR"))
            .unwrap_or_else(|| "vi".to_string());

        Self {
            storage,
            temp,
            cache,
            clipboard_timeout: env_parse("VAULT_CLIPBOARD_TIMEOUT")
                .unwrap_or(DEFAULT_CLIPBOARD_TIMEOUT),
            keyboard_delay: env_parse("VAULT_KEYBOARD_DELAY").unwrap_or(DEFAULT_KEYBOARD_DELAY),
            password_charset: env_var("VAULT_PASSWORD_CHARSET")
                .unwrap_or_else(|| DEFAULT_PASSWORD_CHARSET.to_string()),
            password_length: env_parse("VAULT_PASSWORD_LENGTH").unwrap_or(DEFAULT_PASSWORD_LENGTH),
            passphrase_words: env_parse("VAULT_PASSPHRASE_LENGTH")
                .unwrap_or(DEFAULT_PASSPHRASE_WORDS),
            editor,
            session: detect_session(
                env_var("WAYLAND_DISPLAY").as_deref(),
                env_var("DISPLAY").as_deref(),
            ),
        }
    }
}

/// Pick the graphical session from the display variables.
fn detect_session(wayland_display: Option<&str>, display: Option<&str>) -> Option<Session> {
    if wayland_display.is_some() {
        Some(Session::Wayland)
    } else if display.is_some() {
        Some(Session::X11)
    } else {
        None
    }
}

/// Scratch files live on tmpfs when the system provides one, so plaintext
/// never touches persistent disk.
fn default_temp_dir() -> PathBuf {
    let shm = PathBuf::from("/dev/shm");
    if shm.is_dir() {
        shm
    } else {
        std::env::temp_dir()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env_var(name).and_then(|v| v.parse().ok())
}

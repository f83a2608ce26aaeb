//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a vault command with the test environment applied.
    ///
    /// The fake gpg directory is prepended to PATH, the storage root and
    /// temp/cache dirs point into the test directory, and display variables
    /// are cleared so session detection sees a headless machine.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vault").expect("failed to find vault binary");
        let path = format!(
            "{}:{}",
            self.dir.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path);
        cmd.env("HOME", self.dir.path().join("home"));
        cmd.env("XDG_CACHE_HOME", self.dir.path().join("cache"));
        cmd.env("VAULT_STORAGE", self.store_dir());
        cmd.env("VAULT_TEMP", self.dir.path().join("tmp"));
        cmd.env("NO_COLOR", "1");
        for var in [
            "DISPLAY",
            "WAYLAND_DISPLAY",
            "FZF_NAME",
            "FZF_KEYS",
            "FZF_CANCEL",
            "VAULT_LOG",
            "VAULT_EDITOR",
            "EDITOR",
            "VAULT_PASSWORD_CHARSET",
            "VAULT_PASSWORD_LENGTH",
            "VAULT_PASSPHRASE_LENGTH",
            "VAULT_CLIPBOARD_TIMEOUT",
            "VAULT_KEYBOARD_DELAY",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Shortcut for `vault init <keyid>`.
    pub fn init_cmd(&self, keyid: &str) -> Output {
        self.cmd()
            .args(["init", keyid])
            .output()
            .expect("failed to run vault init")
    }

    /// Shortcut for `vault init <keyid> <subdir>`.
    pub fn init_subdir(&self, keyid: &str, subdir: &str) -> Output {
        self.cmd()
            .args(["init", keyid, subdir])
            .output()
            .expect("failed to run vault init")
    }

    /// Shortcut for `vault create` with piped plaintext.
    pub fn create(&self, name: &str, content: &str) -> Output {
        self.cmd()
            .args(["create", name])
            .write_stdin(content)
            .output()
            .expect("failed to run vault create")
    }

    /// Shortcut for `vault read`.
    pub fn read(&self, name: &str) -> Output {
        self.cmd()
            .args(["read", name])
            .output()
            .expect("failed to run vault read")
    }

    /// Shortcut for `vault show`.
    pub fn show(&self, name: &str, key: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("show").arg(name);
        if let Some(key) = key {
            cmd.arg(key);
        }
        cmd.output().expect("failed to run vault show")
    }

    /// Shortcut for `vault update` with piped plaintext.
    pub fn update(&self, name: &str, content: &str) -> Output {
        self.cmd()
            .args(["update", name])
            .write_stdin(content)
            .output()
            .expect("failed to run vault update")
    }

    /// Shortcut for `vault update <name> <key>` with the value piped.
    pub fn update_key(&self, name: &str, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["update", name, key])
            .write_stdin(value)
            .output()
            .expect("failed to run vault update")
    }

    /// Shortcut for `vault delete`.
    pub fn delete(&self, name: &str) -> Output {
        self.cmd()
            .args(["delete", name])
            .output()
            .expect("failed to run vault delete")
    }

    /// Shortcut for `vault list`.
    pub fn list(&self, subdir: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("list");
        if let Some(subdir) = subdir {
            cmd.arg(subdir);
        }
        cmd.output().expect("failed to run vault list")
    }

    /// Shortcut for `vault find`.
    pub fn find(&self, pattern: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("find");
        if let Some(pattern) = pattern {
            cmd.arg(pattern);
        }
        cmd.output().expect("failed to run vault find")
    }
}

//! Test support utilities for vault integration tests.
//!
//! Provides an isolated test environment with its own storage root, home,
//! and a fake `gpg` on PATH so crypto round-trips run without a keyring.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own storage root, home, cache, and tool directory.
/// No process-global state is mutated; isolation comes entirely from the
/// environment passed to child commands, so tests run in parallel.
pub struct Test {
    /// Root temp directory holding everything below
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment with the fake gpg installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        for sub in ["store", "home", "cache", "tmp", "bin"] {
            fs::create_dir(dir.path().join(sub)).expect("failed to create test subdir");
        }

        for (tool, script) in [("gpg", fixtures::FAKE_GPG), ("fzf", fixtures::FAKE_FZF)] {
            let path = dir.path().join("bin").join(tool);
            fs::write(&path, script).expect("failed to write fake tool");
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("failed to chmod fake tool");
        }

        Self { dir }
    }

    /// Create a test environment with the store initialized for `keyid`.
    pub fn init(keyid: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(keyid);
        assert!(
            output.status.success(),
            "failed to initialize store: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with secrets already stored.
    pub fn with_secrets(keyid: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(keyid);
        for (name, content) in secrets {
            let output = t.create(name, content);
            assert!(
                output.status.success(),
                "failed to create secret {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    pub fn store_dir(&self) -> PathBuf {
        self.dir.path().join("store")
    }

    /// Path of the encrypted file backing a secret.
    pub fn secret_file(&self, name: &str) -> PathBuf {
        self.store_dir().join(format!("{name}.gpg"))
    }

    /// Seed the wordlist cache so passphrase tests never touch the network.
    pub fn seed_wordlist(&self) {
        let cache = self.dir.path().join("cache/vault");
        fs::create_dir_all(&cache).expect("failed to create cache dir");
        fs::write(cache.join("wordlist.txt"), fixtures::fake_wordlist())
            .expect("failed to write wordlist");
    }
}

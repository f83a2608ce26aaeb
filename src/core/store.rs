//! Encrypted store.
//!
//! Maps logical secret names (`example.org/jane`) onto one encrypted file
//! each under the storage root, and owns every on-disk mutation: encrypt and
//! write, decrypt and read, delete with directory pruning. Keeping one file
//! per secret is what makes per-subtree recipient declarations possible and
//! spares unrelated secrets from re-encryption on every change.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;
use zeroize::Zeroizing;

use super::cipher::Cipher;
use super::recipient;
use super::sort::natural_cmp;
use crate::error::{Error, Result};

/// Extension of encrypted secret files.
pub const SECRET_EXT: &str = "gpg";

/// One immediate child of a storage directory.
pub struct Child {
    /// Last path component, `.gpg` stripped for files.
    pub leaf: String,
    /// Full logical name relative to the root.
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Filesystem-backed secret store encrypting through `C`.
pub struct Store<C> {
    root: PathBuf,
    cipher: C,
}

impl<C: Cipher> Store<C> {
    pub fn new(root: impl Into<PathBuf>, cipher: C) -> Self {
        Self {
            root: root.into(),
            cipher,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing the named secret.
    ///
    /// Names are slash-separated with no empty, `.`, `..`, or dot-prefixed
    /// segments, so they can never address `.gpg-id` files or escape the
    /// root.
    pub fn entry_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{name}.{SECRET_EXT}")))
    }

    /// Directory for an optional sub-tree name; the root when `None`.
    pub fn subdir_path(&self, name: Option<&str>) -> Result<PathBuf> {
        match name {
            Some(name) => {
                validate_name(name)?;
                Ok(self.root.join(name))
            }
            None => Ok(self.root.clone()),
        }
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.entry_path(name)?.is_file())
    }

    /// Recipients governing the named secret.
    pub fn recipients_for(&self, name: &str) -> Result<Vec<String>> {
        let path = self.entry_path(name)?;
        recipient::resolve(&self.root, &path)
    }

    /// Encrypt plaintext to the recipients governing `name`.
    pub fn encrypt(&self, name: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        let recipients = self.recipients_for(name)?;
        self.cipher.encrypt(plaintext, &recipients)
    }

    /// Decrypt arbitrary ciphertext with the backend's private key.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.cipher.decrypt(ciphertext)
    }

    /// Decrypt the named secret.
    pub fn load(&self, name: &str) -> Result<Zeroizing<Vec<u8>>> {
        let path = self.entry_path(name)?;
        if !path.is_file() {
            return Err(Error::NotFound(name.to_string()));
        }
        debug!(name, "loading secret");
        let ciphertext = fs::read(&path)?;
        self.cipher.decrypt(&ciphertext)
    }

    /// Encrypt and write the named secret, replacing any previous content.
    ///
    /// The ciphertext lands in a temp file next to the destination and is
    /// renamed over it, so readers never observe a torn write.
    pub fn store(&self, name: &str, plaintext: &[u8]) -> Result<()> {
        let path = self.entry_path(name)?;
        let ciphertext = self.encrypt(name, plaintext)?;

        let parent = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(&ciphertext)?;
        tmp.persist(&path).map_err(|e| e.error)?;

        debug!(name, cipher = self.cipher.name(), "stored secret");
        Ok(())
    }

    /// Remove the named secret and prune ancestor directories it emptied,
    /// up to but not including the root.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.entry_path(name)?;
        if !path.is_file() {
            return Err(Error::NotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        debug!(name, "deleted secret");

        let mut dir = path.parent();
        while let Some(d) = dir {
            if d == self.root || !d.starts_with(&self.root) {
                break;
            }
            // fails on the first non-empty directory, which ends the prune
            if fs::remove_dir(d).is_err() {
                break;
            }
            dir = d.parent();
        }
        Ok(())
    }

    /// Immediate non-hidden children of a storage directory, in
    /// version-aware order. An absent directory simply has no children.
    pub fn children(&self, dir: &Path) -> Result<Vec<Child>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if file_name.starts_with('.') {
                continue;
            }
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                children.push(Child {
                    name: self.logical_name(&path),
                    leaf: file_name,
                    path,
                    is_dir: true,
                });
            } else if let Some(leaf) = file_name.strip_suffix(&format!(".{SECRET_EXT}")) {
                children.push(Child {
                    leaf: leaf.to_string(),
                    name: self.logical_name(&path),
                    path,
                    is_dir: false,
                });
            }
        }
        children.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        Ok(children)
    }

    /// Logical names of all secrets under `base`, in version-aware order.
    pub fn secrets_under(&self, base: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let walker = WalkDir::new(base)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !is_hidden(e));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.io_error().map(|io| io.kind())
                    == Some(std::io::ErrorKind::NotFound) =>
                {
                    continue
                }
                Err(e) => return Err(Error::Io(e.into())),
            };
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == SECRET_EXT)
            {
                names.push(self.logical_name(entry.path()));
            }
        }
        names.sort_by(|a, b| natural_cmp(a, b));
        Ok(names)
    }

    /// All secret names containing `pattern` (all of them when `None`).
    pub fn find(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        let mut names = self.secrets_under(&self.root)?;
        if let Some(pattern) = pattern {
            names.retain(|name| name.contains(pattern));
        }
        Ok(names)
    }

    /// Root-relative display name of a path, `.gpg` stripped.
    pub fn logical_name(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let name = rel.to_string_lossy();
        name.strip_suffix(&format!(".{SECRET_EXT}"))
            .unwrap_or(&name)
            .to_string()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .split('/')
            .all(|seg| !seg.is_empty() && !seg.starts_with('.'));
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(true)
}

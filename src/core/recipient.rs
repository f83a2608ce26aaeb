//! Recipient declarations.
//!
//! A `.gpg-id` file in any storage directory lists one gpg identity per
//! line. The effective recipient set of a secret is the nearest declaration
//! found walking from the secret's directory up to the storage root, which
//! lets a sub-tree (say `work/`) carry a different trust domain than the
//! rest of the store. Resolution only ever reads; declarations are written
//! by `init` alone.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Declaration file name.
pub const RECIPIENT_FILE: &str = ".gpg-id";

/// Find the declaration governing `entry`, walking from its directory up to
/// and including `root`.
///
/// Returns the declaration path, or `NotInitialized` when no ancestor up to
/// the root carries one.
pub fn locate(root: &Path, entry: &Path) -> Result<PathBuf> {
    let mut dir = entry.parent().unwrap_or(root);
    loop {
        let candidate = dir.join(RECIPIENT_FILE);
        if candidate.is_file() {
            debug!(declaration = %candidate.display(), "resolved recipients");
            return Ok(candidate);
        }
        if dir == root {
            return Err(Error::NotInitialized);
        }
        dir = dir.parent().ok_or(Error::NotInitialized)?;
    }
}

/// Recipients governing `entry`, in declaration-file order.
pub fn resolve(root: &Path, entry: &Path) -> Result<Vec<String>> {
    let declaration = locate(root, entry)?;
    let recipients: Vec<String> = fs::read_to_string(&declaration)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if recipients.is_empty() {
        return Err(Error::NotInitialized);
    }
    Ok(recipients)
}

/// Read a declaration file into a recipient set.
pub fn read(path: &Path) -> Result<BTreeSet<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write a declaration file, one recipient per line, sorted.
pub fn write(path: &Path, recipients: &BTreeSet<String>) -> Result<()> {
    let mut contents = recipients.iter().cloned().collect::<Vec<_>>().join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

//! Secret lifecycle commands: create, read, update, delete, copy, move.

use std::io::Read as IoRead;

use zeroize::Zeroizing;

use crate::cli::{editor, output};
use crate::config::Config;
use crate::core::format;
use crate::error::{Error, Result};

/// Create a new secret; fails if it already exists.
pub fn create(config: &Config, name: &str) -> Result<()> {
    let store = super::open_store(config);
    if store.exists(name)? {
        return Err(Error::AlreadyExists(name.to_string()));
    }

    let plaintext = if stdin_is_tty() {
        editor::compose(config, None)?
    } else {
        read_stdin()?
    };

    store.store(name, &plaintext)?;
    output::success(&format!("created {}", name));
    Ok(())
}

/// Print a whole secret, or the listed attribute values.
pub fn read(config: &Config, name: &str, keys: &[String]) -> Result<()> {
    let store = super::open_store(config);
    let plaintext = store.load(name)?;
    let text = std::str::from_utf8(&plaintext)?;

    if keys.is_empty() {
        output::secret(text, false);
    } else {
        // with several values a missing newline would glue them together
        let force_newline = keys.len() > 1;
        for key in keys {
            output::secret(format::lookup(text, key)?, force_newline);
        }
    }
    Ok(())
}

/// Overwrite an existing secret from the editor, stdin, or a single piped
/// attribute value.
pub fn update(config: &Config, name: &str, key: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    if !store.exists(name)? {
        return Err(Error::NotFound(name.to_string()));
    }

    let plaintext = if stdin_is_tty() {
        if key.is_some() {
            return Err(Error::BadArguments(
                "a single key can not be updated interactively".to_string(),
            ));
        }
        let current = store.load(name)?;
        editor::compose(config, Some(&current))?
    } else if let Some(key) = key {
        let current = store.load(name)?;
        let text = std::str::from_utf8(&current)?;
        let value = read_stdin()?;
        let value = std::str::from_utf8(&value)?.trim_end_matches('\n').to_string();
        Zeroizing::new(format::set_attribute(text, key, &value)?.into_bytes())
    } else {
        read_stdin()?
    };

    store.store(name, &plaintext)?;
    output::success(&format!("updated {}", name));
    Ok(())
}

/// Delete a secret and prune directories it emptied.
pub fn delete(config: &Config, name: &str) -> Result<()> {
    let store = super::open_store(config);
    store.delete(name)?;
    output::success(&format!("deleted {}", name));
    Ok(())
}

/// Copy a secret, re-encrypting for the destination's recipients.
pub fn copy(config: &Config, source: &str, destination: &str, force: bool) -> Result<()> {
    let store = super::open_store(config);
    let destination = copy_destination(config, source, destination)?;

    if store.exists(&destination)? && !force {
        return Err(Error::AlreadyExists(destination));
    }
    let plaintext = store.load(source)?;
    store.store(&destination, &plaintext)?;
    output::success(&format!("copied {} to {}", source, destination));
    Ok(())
}

/// Move a secret: copy, then delete the source.
pub fn r#move(config: &Config, source: &str, destination: &str, force: bool) -> Result<()> {
    let store = super::open_store(config);
    let destination = copy_destination(config, source, destination)?;

    if store.exists(&destination)? && !force {
        return Err(Error::AlreadyExists(destination));
    }
    let plaintext = store.load(source)?;
    store.store(&destination, &plaintext)?;
    store.delete(source)?;
    output::success(&format!("moved {} to {}", source, destination));
    Ok(())
}

/// A destination naming an existing directory receives the source's leaf
/// name, like `cp` into a directory.
fn copy_destination(config: &Config, source: &str, destination: &str) -> Result<String> {
    let store = super::open_store(config);
    if store.subdir_path(Some(destination))?.is_dir() {
        let leaf = source.rsplit('/').next().unwrap_or(source);
        Ok(format!("{destination}/{leaf}"))
    } else {
        Ok(destination.to_string())
    }
}

fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

fn read_stdin() -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

//! Init command - declare recipients for the store or a sub-tree.

use std::fs;

use tracing::info;

use crate::cli::output;
use crate::config::Config;
use crate::core::recipient::{self, RECIPIENT_FILE};
use crate::error::{Error, Result};

/// Create (or with `force` extend) a recipient declaration, then re-encrypt
/// every secret the declaration now governs.
pub fn execute(config: &Config, keyid: &str, subdir: Option<&str>, force: bool) -> Result<()> {
    let store = super::open_store(config);
    let base = store.subdir_path(subdir)?;
    let declaration = base.join(RECIPIENT_FILE);

    let mut recipients = if declaration.is_file() {
        if !force {
            return Err(Error::AlreadyInitialized);
        }
        recipient::read(&declaration)?
    } else {
        Default::default()
    };
    recipients.insert(keyid.to_string());

    fs::create_dir_all(&base)?;
    recipient::write(&declaration, &recipients)?;
    info!(keyid, base = %base.display(), "wrote recipient declaration");

    // Existing secrets under the declaration move to the new recipient set.
    let names = store.secrets_under(&base)?;
    for name in &names {
        let plaintext = store.load(name)?;
        store.store(name, &plaintext)?;
    }
    if !names.is_empty() {
        output::success(&format!("re-encrypted {} secret(s)", names.len()));
    }

    output::success(&format!(
        "initialized {} for {}",
        subdir.unwrap_or("store"),
        keyid
    ));
    Ok(())
}

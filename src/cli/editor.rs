//! Interactive plaintext editing.
//!
//! A scratch file with owner-only permissions is created in the configured
//! temp directory (tmpfs when available), handed to the editor, and read
//! back. The `NamedTempFile` guard removes it on every exit path, including
//! errors and panics.

use std::fs;
use std::process::Command;
use std::time::SystemTime;

use tempfile::Builder;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::Config;
use crate::error::{Error, Result};

/// Run the editor over a scratch file seeded with `initial` and return the
/// edited content.
///
/// The edit counts only when the editor exits zero, actually wrote the file
/// (mtime advanced), and left it non-empty; anything else is `EditAborted`.
pub fn compose(config: &Config, initial: Option<&[u8]>) -> Result<Zeroizing<Vec<u8>>> {
    let editor = &config.editor;
    which::which(editor).map_err(|_| Error::DependencyMissing(editor.clone()))?;

    let file = Builder::new()
        .prefix("vault-")
        .suffix(".txt")
        .tempfile_in(&config.temp)?;
    if let Some(content) = initial {
        fs::write(file.path(), content)?;
    }
    let before = mtime(file.path())?;

    debug!(editor, path = %file.path().display(), "launching editor");
    let status = editor_command(editor, file.path()).status()?;
    let after = mtime(file.path())?;

    if !status.success() || after <= before {
        return Err(Error::EditAborted);
    }

    let content = Zeroizing::new(fs::read(file.path())?);
    if content.is_empty() {
        return Err(Error::EditAborted);
    }
    Ok(content)
}

fn mtime(path: &std::path::Path) -> Result<SystemTime> {
    Ok(fs::metadata(path)?.modified()?)
}

/// vim and nvim get flags that keep plaintext out of swap, undo, and
/// history files.
fn editor_command(editor: &str, path: &std::path::Path) -> Command {
    let mut cmd = Command::new(editor);
    if editor.ends_with("nvim") {
        cmd.args(["-c", "set nobackup noswapfile noundofile shada=\"NONE\"", "--"]);
    } else if editor.ends_with("vim") {
        cmd.args(["-c", "set nobackup noswapfile noundofile viminfo=", "--"]);
    }
    cmd.arg(path);
    cmd
}

//! Namespace commands: list, tree, find.

use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::core::cipher::Gpg;
use crate::core::store::Store;
use crate::error::Result;

/// List immediate entries of the store or a sub-tree.
pub fn list(config: &Config, subdir: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    let base = store.subdir_path(subdir)?;
    for child in store.children(&base)? {
        output::line(&child.name);
    }
    Ok(())
}

/// Print all secret names containing `pattern`.
pub fn find(config: &Config, pattern: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    for name in store.find(pattern)? {
        output::line(&name);
    }
    Ok(())
}

/// Render the store or a sub-tree with box-drawing branches.
pub fn tree(config: &Config, subdir: Option<&str>) -> Result<()> {
    let store = super::open_store(config);
    let base = store.subdir_path(subdir)?;
    output::line(subdir.unwrap_or("."));
    render(&store, &base, "")
}

fn render(store: &Store<Gpg>, dir: &Path, prefix: &str) -> Result<()> {
    let children = store.children(dir)?;
    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        output::line(&format!("{prefix}{connector}{}", child.leaf));
        if child.is_dir {
            let extension = if i == last { "    " } else { "│   " };
            render(store, &child.path, &format!("{prefix}{extension}"))?;
        }
    }
    Ok(())
}

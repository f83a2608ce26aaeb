//! Command-line interface.

pub mod editor;
pub mod entry;
pub mod generate;
pub mod init;
pub mod listing;
pub mod output;
pub mod raw;
pub mod select;
pub mod show;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Vault - personal secret storage, one gpg-encrypted file per secret.
#[derive(Parser)]
#[command(
    name = "vault",
    about = "Personal secret storage: one gpg-encrypted file per secret",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a recipient declaration at the root or a sub-tree
    Init {
        /// gpg key id or address to encrypt to
        keyid: String,
        /// Sub-tree to declare for (whole store if omitted)
        subdir: Option<String>,
        /// Merge into an existing declaration
        #[arg(short, long)]
        force: bool,
    },

    /// Create a new secret from the editor or stdin
    Create {
        /// Secret name (e.g. example.org/jane)
        name: String,
    },

    /// Print a secret, or selected attributes of it
    Read {
        /// Secret name
        name: String,
        /// Attribute keys to print instead of the whole secret
        keys: Vec<String>,
    },

    /// Re-edit or overwrite an existing secret
    Update {
        /// Secret name
        name: String,
        /// Single attribute to replace from stdin
        key: Option<String>,
    },

    /// Delete a secret and prune emptied directories
    Delete {
        /// Secret name
        name: String,
    },

    /// Copy a secret to a new name
    Copy {
        source: String,
        destination: String,
        /// Overwrite the destination if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Move a secret to a new name
    Move {
        source: String,
        destination: String,
        /// Overwrite the destination if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Print the password or one attribute of a secret
    Show {
        /// Secret name
        name: String,
        /// Attribute key ("password" is the first line)
        key: Option<String>,
    },

    /// Copy secret values to the clipboard, clearing them after a timeout
    Clip {
        /// Secret name
        name: String,
        /// Attribute keys to copy (the whole secret if omitted)
        keys: Vec<String>,
        /// Seconds before the clipboard is cleared
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Type secret values via the keyboard after a delay
    Type {
        /// Secret name
        name: String,
        /// Attribute keys to type, tab-separated (the whole secret if omitted)
        keys: Vec<String>,
        /// Seconds to wait before typing
        #[arg(short, long)]
        delay: Option<u64>,
    },

    /// List immediate entries of the store or a sub-tree
    List {
        /// Sub-tree to list
        subdir: Option<String>,
    },

    /// Render the store or a sub-tree as a tree
    Tree {
        /// Sub-tree to render
        subdir: Option<String>,
    },

    /// Find secrets whose name contains a substring
    Find {
        /// Substring to match (all secrets if omitted)
        pattern: Option<String>,
    },

    /// Pick a secret and its attributes interactively via fzf
    Select {
        /// Sub-tree to pick from
        subdir: Option<String>,
    },

    /// Generate a random password or passphrase
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },

    /// Print the raw decrypted bytes of a secret
    Load {
        /// Secret name
        name: String,
    },

    /// Encrypt stdin into a secret, replacing any previous content
    Store {
        /// Secret name
        name: String,
    },

    /// Encrypt stdin to stdout for the recipients governing a name
    Encrypt {
        /// Secret name determining the recipient set
        name: String,
    },

    /// Decrypt stdin to stdout
    Decrypt,
}

/// Generator subcommands.
#[derive(Subcommand)]
pub enum GenerateKind {
    /// Random string from a charset
    Password {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Characters to draw from
        #[arg(short, long)]
        charset: Option<String>,
    },

    /// Diceware words from the EFF large wordlist
    Passphrase {
        /// Number of words
        #[arg(short, long)]
        length: Option<usize>,
    },
}

/// Open the encrypted store described by the configuration.
pub(crate) fn open_store(config: &Config) -> crate::core::store::Store<crate::core::cipher::Gpg> {
    use crate::core::cipher::Gpg;
    use crate::core::store::Store;

    // headless sessions cannot pop up a pinentry
    Store::new(&config.storage, Gpg::new(config.session.is_none()))
}

/// Execute a command.
pub fn execute(command: Command, config: &Config) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            keyid,
            subdir,
            force,
        } => init::execute(config, &keyid, subdir.as_deref(), force),
        Create { name } => entry::create(config, &name),
        Read { name, keys } => entry::read(config, &name, &keys),
        Update { name, key } => entry::update(config, &name, key.as_deref()),
        Delete { name } => entry::delete(config, &name),
        Copy {
            source,
            destination,
            force,
        } => entry::copy(config, &source, &destination, force),
        Move {
            source,
            destination,
            force,
        } => entry::r#move(config, &source, &destination, force),
        Show { name, key } => show::show(config, &name, key.as_deref()),
        Clip {
            name,
            keys,
            timeout,
        } => show::clip(config, &name, &keys, timeout),
        Type { name, keys, delay } => show::type_out(config, &name, &keys, delay),
        List { subdir } => listing::list(config, subdir.as_deref()),
        Tree { subdir } => listing::tree(config, subdir.as_deref()),
        Find { pattern } => listing::find(config, pattern.as_deref()),
        Select { subdir } => select::select(config, subdir.as_deref()),
        Generate { kind } => match kind {
            GenerateKind::Password { length, charset } => {
                generate::password(config, length, charset.as_deref())
            }
            GenerateKind::Passphrase { length } => generate::passphrase(config, length),
        },
        Load { name } => raw::load(config, &name),
        Store { name } => raw::store(config, &name),
        Encrypt { name } => raw::encrypt(config, &name),
        Decrypt => raw::decrypt(config),
    }
}

//! Vault - personal secret storage, one gpg-encrypted file per secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── config            # VAULT_* environment settings, built once at startup
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a recipient declaration
//! │   ├── entry         # create / read / update / delete / copy / move
//! │   ├── show          # Attribute extraction, clipboard, keyboard typing
//! │   ├── listing       # list / tree / find
//! │   ├── generate      # Password and passphrase generation
//! │   ├── raw           # load / store / encrypt / decrypt plumbing
//! │   └── editor        # Scoped temp file + $EDITOR invocation
//! └── core/             # Core library components
//!     ├── recipient     # .gpg-id files and ancestor-walk resolution
//!     ├── store         # Path mapping, load/store/delete, pruning
//!     ├── format        # First line = password, `key: value` attributes
//!     ├── sort          # Version-aware name ordering
//!     ├── generate      # Charset sampling and diceware words
//!     └── cipher/       # Encryption backends
//!         ├── mod       # Cipher trait
//!         └── gpg       # gpg subprocess implementation
//! ```
//!
//! # Features
//!
//! - One encrypted file per secret, so sub-trees can declare their own
//!   recipients and unrelated secrets are never re-encrypted
//! - Nearest-ancestor `.gpg-id` resolution for per-subtree trust domains
//! - Atomic write-then-rename replacement of secret files
//! - Diceware passphrases from the EFF large wordlist

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

//! Plumbing commands: load, store, encrypt, decrypt.
//!
//! Byte-exact passthrough between secrets and stdio, for scripting and for
//! moving ciphertext across machines. No trimming, no added newlines.

use std::io::{Read as IoRead, Write as IoWrite};

use zeroize::Zeroizing;

use crate::config::Config;
use crate::error::Result;

/// Write the raw decrypted bytes of a secret to stdout.
pub fn load(config: &Config, name: &str) -> Result<()> {
    let store = super::open_store(config);
    let plaintext = store.load(name)?;
    write_stdout(&plaintext)
}

/// Encrypt stdin into a secret, creating or replacing it.
pub fn store(config: &Config, name: &str) -> Result<()> {
    let store = super::open_store(config);
    let plaintext = read_stdin()?;
    store.store(name, &plaintext)
}

/// Encrypt stdin to stdout for the recipients governing `name`.
pub fn encrypt(config: &Config, name: &str) -> Result<()> {
    let store = super::open_store(config);
    let plaintext = read_stdin()?;
    let ciphertext = store.encrypt(name, &plaintext)?;
    write_stdout(&ciphertext)
}

/// Decrypt stdin to stdout.
pub fn decrypt(config: &Config) -> Result<()> {
    let store = super::open_store(config);
    let mut ciphertext = Vec::new();
    std::io::stdin().read_to_end(&mut ciphertext)?;
    let plaintext = store.decrypt(&ciphertext)?;
    write_stdout(&plaintext)
}

fn read_stdin() -> Result<Zeroizing<Vec<u8>>> {
    let mut buf = Zeroizing::new(Vec::new());
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)?;
    stdout.flush()?;
    Ok(())
}

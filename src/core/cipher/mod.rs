//! Encryption backends.
//!
//! The store only ever sees the [`Cipher`] trait: plaintext bytes in,
//! ciphertext bytes out, with a list of recipient identities on the encrypt
//! side. The sole implementation shells out to `gpg`; decryption key
//! selection is the keyring's business, not ours.

use zeroize::Zeroizing;

use crate::error::Result;

mod gpg;

pub use gpg::Gpg;

/// Public-key encryption primitive.
pub trait Cipher {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Encrypt plaintext to every recipient.
    ///
    /// # Errors
    ///
    /// Returns `EncryptionFailed` when the backend rejects the input or no
    /// recipients are given, `DependencyMissing` when the backend tool is
    /// absent.
    fn encrypt(&self, plaintext: &[u8], recipients: &[String]) -> Result<Vec<u8>>;

    /// Decrypt ciphertext with whatever private key the backend holds.
    ///
    /// The plaintext buffer is wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns `DecryptionFailed` for corrupt input or a missing private
    /// key, `DependencyMissing` when the backend tool is absent.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}

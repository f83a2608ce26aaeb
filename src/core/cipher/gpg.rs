//! gpg subprocess backend.
//!
//! Requires the `gpg` CLI with the recipient public keys in the keyring and
//! a private key available for decryption. Plaintext and ciphertext travel
//! over stdin/stdout; nothing is written to disk here.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{Error, Result};

/// Options passed to every gpg invocation.
const GPG_OPTS: &[&str] = &["--quiet", "--compress-algo=none", "--no-encrypt-to"];

/// GPG cipher backend using the gpg CLI.
pub struct Gpg {
    /// Use loopback pinentry on headless sessions, where no pinentry
    /// program can pop up.
    loopback: bool,
}

impl Gpg {
    pub fn new(loopback: bool) -> Self {
        Self { loopback }
    }

    fn command(&self) -> Result<Command> {
        which::which("gpg").map_err(|_| Error::DependencyMissing("gpg".to_string()))?;
        let mut cmd = Command::new("gpg");
        cmd.args(GPG_OPTS);
        if self.loopback {
            cmd.arg("--pinentry-mode=loopback");
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Ok(cmd)
    }

    fn run(mut child: Child, input: &[u8]) -> std::io::Result<(bool, Vec<u8>, String)> {
        // gpg streams output while it reads, so stdin is fed from a separate
        // thread; writing everything up front would deadlock once the input
        // outgrows the pipe buffer. gpg closing stdin early surfaces through
        // its exit status, not the write.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = Zeroizing::new(input.to_vec());
            std::thread::spawn(move || {
                let _ = stdin.write_all(&input);
            })
        });
        let output = child.wait_with_output()?;
        if let Some(writer) = writer {
            let _ = writer.join();
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Ok((output.status.success(), output.stdout, stderr))
    }
}

impl Cipher for Gpg {
    fn name(&self) -> &'static str {
        "gpg"
    }

    fn encrypt(&self, plaintext: &[u8], recipients: &[String]) -> Result<Vec<u8>> {
        if recipients.is_empty() {
            return Err(Error::EncryptionFailed("no recipients provided".to_string()));
        }

        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            "encrypting with gpg"
        );

        let mut cmd = self.command()?;
        cmd.args(["--batch", "--yes", "--trust-model", "always"]);
        for recipient in recipients {
            cmd.args(["--recipient", recipient]);
        }
        cmd.arg("--encrypt");

        let child = cmd
            .spawn()
            .map_err(|e| Error::EncryptionFailed(format!("failed to spawn gpg: {e}")))?;
        let (ok, stdout, stderr) = Self::run(child, plaintext)
            .map_err(|e| Error::EncryptionFailed(format!("gpg command failed: {e}")))?;

        if !ok {
            return Err(Error::EncryptionFailed(stderr));
        }

        trace!(ciphertext_len = stdout.len(), "encrypted with gpg");
        Ok(stdout)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting with gpg");

        let mut cmd = self.command()?;
        // no --batch here: decryption may legitimately prompt for a
        // passphrase through pinentry
        cmd.arg("--decrypt");

        let child = cmd
            .spawn()
            .map_err(|e| Error::DecryptionFailed(format!("failed to spawn gpg: {e}")))?;
        let (ok, stdout, stderr) = Self::run(child, ciphertext)
            .map_err(|e| Error::DecryptionFailed(format!("gpg command failed: {e}")))?;

        if !ok {
            return Err(Error::DecryptionFailed(stderr));
        }

        trace!(plaintext_len = stdout.len(), "decrypted with gpg");
        Ok(Zeroizing::new(stdout))
    }
}

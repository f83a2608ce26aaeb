//! Generator commands.

use crate::cli::output;
use crate::config::Config;
use crate::core::generate;
use crate::error::Result;

/// Print a random password.
pub fn password(config: &Config, length: Option<usize>, charset: Option<&str>) -> Result<()> {
    let length = length.unwrap_or(config.password_length);
    let charset = charset.unwrap_or(&config.password_charset);
    let password = generate::password(charset, length)?;
    output::secret(&password, false);
    Ok(())
}

/// Print a diceware passphrase.
pub fn passphrase(config: &Config, words: Option<usize>) -> Result<()> {
    let words = words.unwrap_or(config.passphrase_words);
    let passphrase = generate::passphrase(words, &config.cache)?;
    output::secret(&passphrase, false);
    Ok(())
}

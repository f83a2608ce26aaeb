//! Password and passphrase generation.
//!
//! Passwords sample a charset uniformly with the OS RNG. Passphrases follow
//! the diceware scheme: five simulated d6 rolls index one word in the EFF
//! large wordlist, which is downloaded once and cached.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};

/// EFF large wordlist, 7776 words keyed by five-dice rolls.
pub const WORDLIST_URL: &str = "https://www.eff.org/files/2016/07/18/eff_large_wordlist.txt";

const WORDLIST_CACHE: &str = "wordlist.txt";

/// Random string of `length` characters drawn uniformly from `charset`.
pub fn password(charset: &str, length: usize) -> Result<String> {
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(Error::EmptyCharset);
    }
    let mut rng = OsRng;
    Ok((0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// `words` diceware words joined by spaces.
pub fn passphrase(words: usize, cache_dir: &Path) -> Result<String> {
    let wordlist = load_wordlist(cache_dir)?;
    let mut rng = OsRng;
    let mut picked = Vec::with_capacity(words);
    for _ in 0..words {
        let roll = dice_roll(&mut rng);
        let word = wordlist
            .get(&roll)
            .ok_or_else(|| Error::Wordlist(format!("roll {roll} missing from wordlist")))?;
        picked.push(word.as_str());
    }
    Ok(picked.join(" "))
}

/// Five d6 rolls as a digit string, e.g. `35142`.
fn dice_roll(rng: &mut OsRng) -> String {
    (0..5)
        .map(|_| char::from(b'1' + rng.gen_range(0..6u8)))
        .collect()
}

fn load_wordlist(cache_dir: &Path) -> Result<HashMap<String, String>> {
    let cache = cache_dir.join(WORDLIST_CACHE);
    let text = if cache.is_file() {
        fs::read_to_string(&cache)?
    } else {
        debug!(url = WORDLIST_URL, "fetching wordlist");
        let text = reqwest::blocking::get(WORDLIST_URL)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| Error::Wordlist(e.to_string()))?;
        fs::create_dir_all(cache_dir)?;
        fs::write(&cache, &text)?;
        text
    };
    parse_wordlist(&text)
}

fn parse_wordlist(text: &str) -> Result<HashMap<String, String>> {
    let mut wordlist = HashMap::new();
    for line in text.lines() {
        if let Some((roll, word)) = line.trim().split_once('\t') {
            wordlist.insert(roll.to_string(), word.to_string());
        }
    }
    if wordlist.is_empty() {
        return Err(Error::Wordlist("wordlist is empty".to_string()));
    }
    Ok(wordlist)
}

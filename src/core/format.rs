//! Decrypted secret text layout.
//!
//! Line 1 is the primary value (the password). Every following line may be a
//! `key: value` attribute. Keys are matched literally and the first match
//! wins; lines that do not parse are ignored on lookup, so free-form notes
//! can sit alongside attributes.

use crate::error::{Error, Result};

/// Reserved attribute name addressing the first line.
pub const PRIMARY_KEY: &str = "password";

/// First line of the secret, without its line terminator.
pub fn primary(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

/// Value of the first `key: value` line after the first, matching `key`
/// literally.
pub fn attribute<'a>(text: &'a str, key: &str) -> Result<&'a str> {
    for line in text.lines().skip(1) {
        if let Some(rest) = line.strip_prefix(key) {
            if let Some(value) = rest.strip_prefix(": ") {
                if !value.is_empty() {
                    return Ok(value);
                }
            }
        }
    }
    Err(Error::AttributeNotFound(key.to_string()))
}

/// Attribute lookup with `password` addressing the primary value.
pub fn lookup<'a>(text: &'a str, key: &str) -> Result<&'a str> {
    if key == PRIMARY_KEY {
        Ok(primary(text))
    } else {
        attribute(text, key)
    }
}

/// All attributes of the secret, in line order: the primary value under
/// `password`, then the first occurrence of each `key: value` line. Lines
/// that do not parse are skipped.
pub fn attributes(text: &str) -> Vec<(&str, &str)> {
    let mut attrs: Vec<(&str, &str)> = vec![(PRIMARY_KEY, primary(text))];
    for line in text.lines().skip(1) {
        if let Some((key, value)) = line.split_once(": ") {
            if key.is_empty() || value.is_empty() || key == PRIMARY_KEY {
                continue;
            }
            if attrs.iter().all(|(k, _)| *k != key) {
                attrs.push((key, value));
            }
        }
    }
    attrs
}

/// Replace one attribute (or the primary value) and return the new text.
///
/// The first matching attribute line is rewritten in place; a missing
/// attribute is appended. All other lines are preserved verbatim.
pub fn set_attribute(text: &str, key: &str, value: &str) -> Result<String> {
    if key != PRIMARY_KEY && (key.contains(':') || key.contains(' ') || key.is_empty()) {
        return Err(Error::InvalidAttribute(key.to_string()));
    }

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }

    if key == PRIMARY_KEY {
        lines[0] = value.to_string();
    } else {
        let existing = lines[1..]
            .iter()
            .position(|line| line.strip_prefix(key).is_some_and(|r| r.starts_with(": ")));
        match existing {
            Some(at) => lines[at + 1] = format!("{key}: {value}"),
            None => lines.push(format!("{key}: {value}")),
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

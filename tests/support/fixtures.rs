//! Test fixtures and constants.

/// Stand-in for gpg: ciphertext is a header recording the `--recipient`
/// arguments, followed by the plaintext. Decryption strips the header and
/// rejects input that was not produced by this script, so tests exercise
/// the full encrypt/store/load/decrypt path without a keyring.
pub const FAKE_GPG: &str = r#"#!/bin/sh
mode=
recipients=
prev=
for arg in "$@"; do
  if [ "$prev" = "--recipient" ]; then
    recipients="$recipients$arg,"
  fi
  case "$arg" in
    --encrypt) mode=encrypt ;;
    --decrypt) mode=decrypt ;;
  esac
  prev=$arg
done
case "$mode" in
  encrypt)
    printf 'FAKEGPG[%s]\n' "$recipients"
    cat
    ;;
  decrypt)
    IFS= read -r header || { echo 'empty ciphertext' >&2; exit 2; }
    case "$header" in
      'FAKEGPG['*) cat ;;
      *) echo 'decryption failed: bad ciphertext' >&2; exit 2 ;;
    esac
    ;;
  *) : ;;
esac
"#;

/// Stand-in for fzf: non-interactive, driven by environment variables.
/// `FZF_NAME` answers the single-choice picker and `FZF_KEYS` (space
/// separated) the `--multi` picker; unset, each picker takes the first
/// candidate. `FZF_CANCEL` simulates the user backing out.
pub const FAKE_FZF: &str = r#"#!/bin/sh
multi=
for arg in "$@"; do
  [ "$arg" = --multi ] && multi=1
done
input=$(cat)
[ -n "$FZF_CANCEL" ] && exit 130
[ -z "$input" ] && exit 1
if [ -n "$multi" ]; then
  if [ -n "$FZF_KEYS" ]; then
    for key in $FZF_KEYS; do printf '%s\n' "$key"; done
  else
    printf '%s\n' "$input" | head -n 1
  fi
else
  if [ -n "$FZF_NAME" ]; then
    printf '%s\n' "$FZF_NAME"
  else
    printf '%s\n' "$input" | head -n 1
  fi
fi
"#;

/// Recipient ids used across tests.
pub const ALICE: &str = "alice@example.org";
pub const BOB: &str = "bob@example.org";

/// A secret with attributes, including a duplicate key.
pub const JANE_SECRET: &str = "hunter2\nuser: jane\nurl: https://example.org\nuser: ignored\n";

/// Standard secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("example.org/jane", JANE_SECRET),
    ("example.org/joe", "s3cret\n"),
    ("bank/checking", "pin 1234\n"),
];

/// Complete diceware wordlist: every five-dice roll maps to `word<roll>`.
pub fn fake_wordlist() -> String {
    let mut text = String::new();
    for a in 1..=6 {
        for b in 1..=6 {
            for c in 1..=6 {
                for d in 1..=6 {
                    for e in 1..=6 {
                        text.push_str(&format!("{a}{b}{c}{d}{e}\tword{a}{b}{c}{d}{e}\n"));
                    }
                }
            }
        }
    }
    text
}

//! Version-aware name ordering.
//!
//! Digit runs compare numerically, everything else byte-wise, so `a2` sorts
//! before `a10`. Numbers are compared as digit strings (leading zeros
//! stripped, shorter run first) to avoid any numeric overflow.

use std::cmp::Ordering;

/// Compare two names with embedded numbers ordered numerically.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let start_a = i;
            while i < a.len() && a[i].is_ascii_digit() {
                i += 1;
            }
            let start_b = j;
            while j < b.len() && b[j].is_ascii_digit() {
                j += 1;
            }
            let run_a = trim_leading_zeros(&a[start_a..i]);
            let run_b = trim_leading_zeros(&b[start_b..j]);
            let ord = run_a.len().cmp(&run_b.len()).then_with(|| run_a.cmp(run_b));
            if ord != Ordering::Equal {
                return ord;
            }
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let first = digits.iter().position(|&d| d != b'0');
    match first {
        Some(at) => &digits[at..],
        // all zeros, keep one so "0" still compares
        None => &digits[digits.len() - 1..],
    }
}

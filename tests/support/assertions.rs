//! Test assertion helpers.

use std::process::Output;

use predicates::prelude::*;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("command failed:\n{}", stderr);
    }
}

/// Assert that a command failed, with exit code 1.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected command to fail but it succeeded"
    );
    assert_eq!(output.status.code(), Some(1), "failures must exit 1");
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        predicate::str::contains(expected).eval(&out),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        predicate::str::contains(expected).eval(&err),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

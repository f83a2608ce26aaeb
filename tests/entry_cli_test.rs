//! Tests for create, read, update, delete, copy, and move.

mod support;

use std::fs;
use support::*;

#[test]
fn create_then_read_round_trips() {
    let t = Test::init(ALICE);

    assert_success(&t.create("example.org/jane", JANE_SECRET));
    let output = t.read("example.org/jane");
    assert_success(&output);
    assert_eq!(stdout(&output), JANE_SECRET.trim_end_matches('\n'));
}

#[test]
fn load_round_trips_exact_bytes() {
    let t = Test::init(ALICE);
    assert_success(&t.create("example.org/jane", JANE_SECRET));

    let output = t
        .cmd()
        .args(["load", "example.org/jane"])
        .output()
        .expect("failed to run vault load");
    assert_success(&output);
    assert_eq!(output.stdout, JANE_SECRET.as_bytes());
}

#[test]
fn create_without_init_fails() {
    let t = Test::new();
    let output = t.create("x", "data\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stderr_contains(&output, "vault init");
}

#[test]
fn create_existing_fails_and_preserves_content() {
    let t = Test::init(ALICE);
    assert_success(&t.create("x", "original\n"));

    let output = t.create("x", "clobbered\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");

    let output = t.read("x");
    assert_success(&output);
    assert_eq!(stdout(&output), "original");
}

#[test]
fn read_missing_fails() {
    let t = Test::init(ALICE);
    let output = t.read("nope");
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
}

#[test]
fn read_selected_attributes() {
    let t = Test::with_secrets(ALICE, &[("example.org/jane", JANE_SECRET)]);

    let output = t
        .cmd()
        .args(["read", "example.org/jane", "user", "url"])
        .output()
        .expect("failed to run vault read");
    assert_success(&output);
    assert_eq!(stdout(&output), "jane\nhttps://example.org\n");
}

#[test]
fn update_replaces_content() {
    let t = Test::with_secrets(ALICE, &[("x", "old\n")]);

    assert_success(&t.update("x", "new\n"));
    let output = t.read("x");
    assert_eq!(stdout(&output), "new");
}

#[test]
fn update_missing_fails() {
    let t = Test::init(ALICE);
    let output = t.update("nope", "data\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
}

#[test]
fn update_single_attribute_from_stdin() {
    let t = Test::with_secrets(ALICE, &[("example.org/jane", JANE_SECRET)]);

    assert_success(&t.update_key("example.org/jane", "user", "joe\n"));
    let output = t.show("example.org/jane", Some("user"));
    assert_eq!(stdout(&output), "joe");

    // other lines survive the attribute rewrite
    let output = t.show("example.org/jane", Some("url"));
    assert_eq!(stdout(&output), "https://example.org");
}

#[test]
fn update_password_attribute_replaces_primary() {
    let t = Test::with_secrets(ALICE, &[("x", "old-pw\nuser: jane\n")]);

    assert_success(&t.update_key("x", "password", "new-pw\n"));
    let output = t.show("x", None);
    assert_eq!(stdout(&output), "new-pw");
}

#[test]
fn delete_removes_secret_and_prunes_empty_dirs() {
    let t = Test::with_secrets(ALICE, &[("a/b/one", "1\n"), ("a/two", "2\n")]);

    assert_success(&t.delete("a/b/one"));
    let output = t.read("a/b/one");
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");

    assert!(!t.store_dir().join("a/b").exists(), "a/b should be pruned");
    assert!(
        t.store_dir().join("a").exists(),
        "a still holds another secret"
    );

    assert_success(&t.delete("a/two"));
    assert!(!t.store_dir().join("a").exists());
    assert!(t.store_dir().exists(), "the root is never pruned");
}

#[test]
fn delete_missing_fails() {
    let t = Test::init(ALICE);
    let output = t.delete("nope");
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
}

#[test]
fn copy_duplicates_content() {
    let t = Test::with_secrets(ALICE, &[("a", "data\n")]);

    let output = t
        .cmd()
        .args(["copy", "a", "b"])
        .output()
        .expect("failed to run vault copy");
    assert_success(&output);

    assert_eq!(stdout(&t.read("a")), "data");
    assert_eq!(stdout(&t.read("b")), "data");
}

#[test]
fn copy_refuses_existing_destination_without_force() {
    let t = Test::with_secrets(ALICE, &[("a", "one\n"), ("b", "two\n")]);

    let output = t
        .cmd()
        .args(["copy", "a", "b"])
        .output()
        .expect("failed to run vault copy");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_eq!(stdout(&t.read("b")), "two");

    let output = t
        .cmd()
        .args(["copy", "--force", "a", "b"])
        .output()
        .expect("failed to run vault copy");
    assert_success(&output);
    assert_eq!(stdout(&t.read("b")), "one");
}

#[test]
fn copy_into_directory_keeps_leaf_name() {
    let t = Test::with_secrets(ALICE, &[("site/jane", "pw\n"), ("other", "x\n")]);

    let output = t
        .cmd()
        .args(["copy", "other", "site"])
        .output()
        .expect("failed to run vault copy");
    assert_success(&output);
    assert_eq!(stdout(&t.read("site/other")), "x");
}

#[test]
fn move_removes_the_source() {
    let t = Test::with_secrets(ALICE, &[("old/name", "data\n")]);

    let output = t
        .cmd()
        .args(["move", "old/name", "new"])
        .output()
        .expect("failed to run vault move");
    assert_success(&output);

    assert_eq!(stdout(&t.read("new")), "data");
    assert_failure(&t.read("old/name"));
    assert!(!t.store_dir().join("old").exists(), "emptied dir is pruned");
}

#[test]
fn invalid_names_are_rejected() {
    let t = Test::init(ALICE);
    for bad in ["../escape", ".gpg-id", "a//b", "a/.hidden"] {
        let output = t.create(bad, "data\n");
        assert_failure(&output);
        assert_stderr_contains(&output, "invalid secret name");
    }
}

#[test]
fn corrupt_ciphertext_fails_decryption() {
    let t = Test::with_secrets(ALICE, &[("x", "data\n")]);
    fs::write(t.secret_file("x"), "garbage\n").unwrap();

    let output = t.read("x");
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

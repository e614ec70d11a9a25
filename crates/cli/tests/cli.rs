//! CLI integration tests for the veneer binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout,
//! and stderr. Credential tests point `VENEER_CREDENTIALS` at a temp
//! file so the user's real store is never touched, and clear the
//! provider env vars so ambient keys can't leak in.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn veneer() -> Command {
    cargo_bin_cmd!("veneer")
}

/// A command with credentials isolated to a temp store.
fn veneer_with_store(dir: &TempDir) -> Command {
    let mut cmd = veneer();
    cmd.env("VENEER_CREDENTIALS", dir.path().join("credentials.toml"))
        .env_remove("OPENAI_API_KEY")
        .env_remove("GEMINI_API_KEY");
    cmd
}

// ──────────────────────────────────────────────
// Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    veneer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Veneer prompt-to-UI preview toolchain"));
}

#[test]
fn version_exits_0() {
    veneer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("veneer"));
}

// ──────────────────────────────────────────────
// extract
// ──────────────────────────────────────────────

#[test]
fn extract_reads_stdin_and_strips_fences() {
    veneer()
        .arg("extract")
        .write_stdin("Here is your UI:\n```jsx\n<div className=\"p-4\"><h1>Hi</h1></div>\n```")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<div className=\"p-4\"><h1>Hi</h1></div>",
        ));
}

#[test]
fn extract_reads_a_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("response.txt");
    std::fs::write(&path, "```\n<span>ok</span>\n```").unwrap();

    veneer()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<span>ok</span>"));
}

#[test]
fn extract_missing_file_exits_1() {
    veneer()
        .arg("extract")
        .arg("no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

// ──────────────────────────────────────────────
// render
// ──────────────────────────────────────────────

#[test]
fn render_valid_markup_emits_sanitized_html() {
    veneer()
        .arg("render")
        .write_stdin("<div className=\"p-4\"><h1>Hi</h1></div>")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<div class=\"p-4\"><h1>Hi</h1></div>",
        ));
}

#[test]
fn render_mismatched_tag_exits_1_with_parse_error() {
    veneer()
        .arg("render")
        .write_stdin("<div><span></div>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatched closing tag"));
}

#[test]
fn render_json_output_wraps_the_outcome() {
    veneer()
        .args(["--output", "json", "render"])
        .write_stdin("<p>hi</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\":\"rendered\""));
}

#[test]
fn render_strips_script_elements() {
    veneer()
        .arg("render")
        .write_stdin("<div><script>alert(1)</script><p>safe</p></div>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>safe</p>").and(predicate::str::contains("alert").not()));
}

// ──────────────────────────────────────────────
// keys
// ──────────────────────────────────────────────

#[test]
fn keys_set_get_list_roundtrip() {
    let dir = TempDir::new().unwrap();

    veneer_with_store(&dir)
        .args(["keys", "set", "openai", "sk-test-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stored key for 'openai'"));

    veneer_with_store(&dir)
        .args(["keys", "get", "openai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sk-test-123"));

    veneer_with_store(&dir)
        .args(["keys", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openai_api_key"));
}

#[test]
fn keys_get_without_stored_key_exits_1() {
    let dir = TempDir::new().unwrap();
    veneer_with_store(&dir)
        .args(["keys", "get", "gemini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no key stored for 'gemini'"));
}

// ──────────────────────────────────────────────
// generate
// ──────────────────────────────────────────────

#[test]
fn generate_without_credential_fails_before_any_network_call() {
    let dir = TempDir::new().unwrap();
    veneer_with_store(&dir)
        .args(["generate", "a pricing page"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no API key configured for provider 'openai'",
        ));
}

#[test]
fn generate_with_empty_prompt_exits_1() {
    let dir = TempDir::new().unwrap();
    veneer_with_store(&dir)
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("prompt is empty"));
}

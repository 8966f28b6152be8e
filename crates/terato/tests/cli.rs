//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `contents` to `name` inside a fresh temp dir.
fn manuscript(name: &str, contents: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    (tmp, path)
}

const SAMPLE: &str = "El veloz murciélago sacudía la cabeza. \
    Rápidamente comentó que las cosas iban bien, y lentamente se fue.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("TERATO_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("grammar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["context_words"].is_number());
}

#[test]
fn info_shows_package_name() {
    cmd()
        .args(["info", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains("Checks"));
}

// =============================================================================
// Checks Command
// =============================================================================

#[test]
fn checks_lists_every_code() {
    let assert = cmd().args(["checks", "--color", "never"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    for code in [
        "mente",
        "repetition",
        "contained",
        "overused",
        "pedantic-sayword",
        "misused-sayword",
        "misused-verb",
        "misused-expression",
    ] {
        assert!(stdout.contains(code), "missing {code} in:\n{stdout}");
    }
    assert!(!stdout.contains("[disabled]"));
}

#[test]
fn checks_json_reflects_selection() {
    let output = cmd()
        .args(["checks", "--json", "--disable", "overused,mente"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list[0]["code"], "mente");
    assert_eq!(list[0]["enabled"], false);
    assert_eq!(list[0]["window"], 100);
    assert_eq!(list[1]["enabled"], true);
    assert_eq!(list[3]["enabled"], false);
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_reports_findings_and_total() {
    let (_tmp, path) = manuscript("capitulo.txt", SAMPLE);
    cmd()
        .args(["--color", "never", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[misused-expression] expresión generalmente mal usada: sacud* la cabeza",
        ))
        .stdout(predicate::str::contains("[mente]"))
        .stdout(predicate::str::contains("[misused-sayword]"))
        .stdout(predicate::str::contains("[overused]"))
        .stdout(predicate::str::contains("Total: 4 avisos"))
        .stdout(predicate::str::contains("Página").not());
}

#[test]
fn check_reads_stdin() {
    cmd()
        .args(["--color", "never", "check", "-"])
        .write_stdin("Sacudió la cabeza.")
        .assert()
        .success()
        .stdout(predicate::str::contains("(… sacudió la cabeza)"))
        .stdout(predicate::str::contains("Total: 1 avisos"));
}

#[test]
fn check_clean_text() {
    cmd()
        .args(["--color", "never", "check"])
        .write_stdin("La noche cayó sobre el pueblo.")
        .assert()
        .success()
        .stdout(predicate::str::diff("Total: 0 avisos\n"));
}

#[test]
fn check_json_output() {
    let (_tmp, path) = manuscript("capitulo.txt", SAMPLE);
    let output = cmd().args(["check", "--json"]).arg(&path).assert().success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["total_findings"], 4);
    assert!(json["pages"][0]["page"].is_null());
    assert_eq!(
        json["pages"][0]["groups"][0][0]["check"],
        "misused-expression"
    );
    assert_eq!(json["pages"][0]["groups"][0][0]["word"], "cabeza");
}

#[test]
fn check_paging_prints_page_headers() {
    let (_tmp, path) = manuscript("novela.txt", "espetó\x0cnada\x0cmasculló");
    cmd()
        .args(["--color", "never", "check", "--paging"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Página 1:"))
        .stdout(predicate::str::contains("Página 3:"))
        .stdout(predicate::str::contains("Página 2:").not());
}

#[test]
fn check_markdown_skips_code_and_headings() {
    let (_tmp, path) = manuscript(
        "capitulo.md",
        "# Sacudió la cabeza\n\nTexto limpio.\n\n```\ncomentó\n```\n",
    );
    cmd()
        .args(["--color", "never", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0 avisos"));
}

#[test]
fn check_enable_limits_checks() {
    let (_tmp, path) = manuscript("capitulo.txt", SAMPLE);
    cmd()
        .args(["--color", "never", "check", "--enable", "mente"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[mente]"))
        .stdout(predicate::str::contains("[overused]").not())
        .stdout(predicate::str::contains("Total: 1 avisos"));
}

#[test]
fn check_enable_and_disable_conflict() {
    cmd()
        .args(["check", "--enable", "mente", "--disable", "overused"])
        .write_stdin("texto")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot enable and disable"));
}

#[test]
fn check_unknown_code_rejected() {
    cmd()
        .args(["check", "--disable", "adverbs"])
        .write_stdin("texto")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'adverbs'"));
}

#[test]
fn check_max_findings_gate() {
    let (_tmp, path) = manuscript("capitulo.txt", SAMPLE);
    cmd()
        .args(["check", "--max-findings", "2"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("4 findings exceed the limit of 2"));

    cmd()
        .args(["check", "--max-findings", "4"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn check_context_words_flag() {
    cmd()
        .args(["--color", "never", "check", "--context-words", "1"])
        .write_stdin("Sacudió la cabeza.")
        .assert()
        .success()
        .stdout(predicate::str::contains("(… cabeza)"));
}

#[test]
fn check_missing_file_fails() {
    cmd()
        .args(["check", "no-existe.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read no-existe.txt"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    cmd().args(["-q", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn color_never_emits_plain_text() {
    let (_tmp, path) = manuscript("capitulo.txt", SAMPLE);
    cmd()
        .args(["--color", "never", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());

    for command in ["checks", "info"] {
        cmd()
            .args(["--color", "never", command])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn color_always_emits_escape_codes() {
    cmd()
        .args(["--color", "always", "check"])
        .write_stdin("Sacudió la cabeza.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn piped_output_is_plain_by_default() {
    cmd()
        .env_remove("CLICOLOR_FORCE")
        .env_remove("FORCE_COLOR")
        .arg("check")
        .write_stdin("Sacudió la cabeza.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not())
        .stdout(predicate::str::contains("[misused-expression]"));
}

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

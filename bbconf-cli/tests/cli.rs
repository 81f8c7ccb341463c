//! Integration tests for the bbconf CLI.
//!
//! These tests verify argument parsing, help text, version output and
//! completion generation.

use assert_cmd::Command;
use predicates::prelude::*;

fn bbconf() -> Command {
    Command::cargo_bin("bbconf").expect("Failed to find bbconf binary")
}

/// Test that the binary without arguments fails and shows usage.
#[test]
fn test_cli_no_arguments() {
    bbconf()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    bbconf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bbconf"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists every command.
#[test]
fn test_cli_help_flag() {
    let assert = bbconf().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Inspect and edit sectioned JSON config files"));
    for command in ["show", "sections", "get", "set", "format", "validate", "completions"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

/// Test that subcommand help works.
#[test]
fn test_set_help() {
    bbconf()
        .args(["set", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-backup"))
        .stdout(predicate::str::contains("KEY=VALUE"));
}

/// Test that an unknown subcommand is rejected by clap.
#[test]
fn test_unknown_subcommand() {
    bbconf()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that completion scripts are generated.
#[test]
fn test_completions_bash() {
    bbconf()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_bbconf"))
        .stderr(predicate::str::contains("# Generating bash completion script"));
}

/// Test that --quiet suppresses completion instructions.
#[test]
fn test_completions_quiet() {
    bbconf()
        .args(["--quiet", "completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef bbconf"))
        .stderr(predicate::str::is_empty());
}

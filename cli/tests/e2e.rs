//! End-to-end tests driving the `regit` binary against a fixture home
//! directory, a forced `$SHELL`, and a stub `git` on `$PATH`.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a home directory whose `.zsh_history` ends with `history`, plus a
/// `bin/git` stub that echoes its arguments and exits with `git_exit`.
fn fixture(history: &str, git_exit: i32) -> TempDir {
    let home = TempDir::new().expect("tempdir");
    fs::write(home.path().join(".zsh_history"), history).expect("write history");

    let bin = home.path().join("bin");
    fs::create_dir(&bin).expect("mkdir bin");
    let stub = bin.join("git");
    fs::write(&stub, format!("#!/bin/sh\necho \"stub-git $*\"\nexit {git_exit}\n"))
        .expect("write git stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).expect("chmod git stub");

    home
}

fn regit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("regit").expect("binary builds");
    let path = std::env::var("PATH").unwrap_or_default();
    cmd.env("HOME", home)
        .env("SHELL", "/bin/zsh")
        .env("PATH", format!("{}:{path}", home.join("bin").display()));
    cmd
}

#[test]
fn corrects_dropped_letter_and_relays_stdout() {
    let home = fixture("git comit -m \"x\"\n", 0);
    regit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stub-git commit -m \"x\""));
}

#[test]
fn gibberish_subcommand_reports_no_candidate() {
    let home = fixture("git xyzzyplugh\n", 0);
    regit(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no candidate"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn extended_history_entry_resolves() {
    let home = fixture(": 1700000000:0;git stauts\n", 0);
    regit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stub-git status"));
}

#[test]
fn tied_candidates_pick_first_without_prompt() {
    // A bare prefix of several subcommands; automatic mode takes the
    // first-ranked match instead of prompting.
    let home = fixture("git check-\n", 0);
    regit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stub-git check-attr"));
}

#[test]
fn non_git_command_is_an_input_error() {
    let home = fixture("ls -la\n", 0);
    regit(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git invocation"));
}

#[test]
fn missing_subcommand_is_an_input_error() {
    let home = fixture("git\n", 0);
    regit(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no subcommand"));
}

#[test]
fn unsupported_shell_fails() {
    let home = fixture("git stauts\n", 0);
    regit(home.path())
        .env("SHELL", "/bin/bash")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shell"));
}

#[test]
fn unset_shell_fails() {
    let home = fixture("git stauts\n", 0);
    regit(home.path())
        .env_remove("SHELL")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SHELL is unset"));
}

#[test]
fn missing_history_file_fails() {
    let home = TempDir::new().expect("tempdir");
    let mut cmd = Command::cargo_bin("regit").expect("binary builds");
    cmd.env("HOME", home.path())
        .env("SHELL", "/bin/zsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("history file"));
}

#[test]
fn malformed_extended_history_fails() {
    let home = fixture(": 1700000000:0;\n", 0);
    regit(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid zsh extended-history"));
}

#[test]
fn child_exit_status_is_propagated() {
    let home = fixture("git stauts\n", 3);
    regit(home.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("stub-git status"));
}

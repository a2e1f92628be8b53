// Binary-level behavior: argument handling, stubs and missing-token path.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn github() -> Command {
    let mut cmd = Command::cargo_bin("github").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_arguments_prints_help_and_fails() {
    github()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("auth"))
        .stderr(predicate::str::contains("release"));
}

#[test]
fn unknown_command_fails() {
    github().arg("deploy").assert().code(1);
    github().args(["release", "publish"]).assert().code(1);
}

#[test]
fn help_succeeds() {
    github()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("List, create or delete releases"));
}

#[test]
fn create_and_delete_are_placeholders() {
    github()
        .args(["release", "create", "-n", "First", "-t", "v1.0.0", "-f", "dist.tar.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Create release: not implemented"));

    github()
        .args(["release", "delete", "--tag", "v1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete release: not implemented"));
}

#[test]
fn listing_without_token_fails() {
    let home = tempdir().unwrap();

    github()
        .env("HOME", home.path())
        .current_dir(home.path())
        .args(["release", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No token available. Please use the auth command.",
        ));

    github()
        .env("HOME", home.path())
        .current_dir(home.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No token available"));
}

#[test]
fn listing_outside_a_repository_fails() {
    let home = tempdir().unwrap();
    let token_dir = home.path().join(".github");
    std::fs::create_dir_all(&token_dir).unwrap();
    std::fs::write(token_dir.join("token"), "ghp_stored").unwrap();

    github()
        .env("HOME", home.path())
        .current_dir(home.path())
        .args(["release", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Current directory is not a valid Git repository",
        ));
}

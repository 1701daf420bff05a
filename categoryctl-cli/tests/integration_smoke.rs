//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn categoryctl() -> Command {
    let mut cmd = Command::cargo_bin("categoryctl").unwrap();
    cmd.env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_serve_help() {
    categoryctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_help() {
    categoryctl()
        .arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-connections"))
        .stdout(predicate::str::contains("--acquire-timeout-secs"));
}

#[test]
fn test_completions_bash() {
    categoryctl()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("categoryctl"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = std::env::temp_dir();
    categoryctl()
        .current_dir(dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

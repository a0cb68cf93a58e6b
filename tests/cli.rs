//! Binary startup behavior

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_server_flags() {
    Command::cargo_bin("gitexplain")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bind"))
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--model"));
}

#[test]
fn missing_api_key_is_fatal_at_startup() {
    Command::cargo_bin("gitexplain")
        .unwrap()
        .env_remove("GEMINI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn unreadable_config_file_is_fatal() {
    Command::cargo_bin("gitexplain")
        .unwrap()
        .env("GEMINI_API_KEY", "test-key")
        .args(["--config", "/nonexistent/gitexplain.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn malformed_config_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write;
    writeln!(file, "this is not toml = = =").unwrap();

    Command::cargo_bin("gitexplain")
        .unwrap()
        .env("GEMINI_API_KEY", "test-key")
        .args(["--config", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

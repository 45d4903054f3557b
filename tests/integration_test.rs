// tests/integration_test.rs
use serial_test::serial;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn next_semvers(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_next-semvers"));
    command
        .args(args)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("INPUT_VERSION")
        .env_remove("INPUT_MIN_VERSION")
        .env_remove("INPUT_STRICT")
        .env_remove("RUST_LOG");
    command
}

fn run(command: &mut Command) -> Output {
    command.output().expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = run(&mut next_semvers(&["--help"]));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("next-semvers"));
    assert!(stdout.contains("Compute the next major, minor and patch versions"));
}

#[test]
fn test_prints_env_lines() {
    let output = run(&mut next_semvers(&["v1.2.3", "--min-version", "v0.0.0"]));

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "major=2.0.0\nminor=1.3.0\npatch=1.2.4\nv_major=v2.0.0\nv_minor=v1.3.0\nv_patch=v1.2.4\n"
    );
}

#[test]
fn test_prints_json() {
    let output = run(&mut next_semvers(&["1-beta", "--format", "json", "--with-current"]));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current"], "1.0.0-beta");
    assert_eq!(value["patch"], "1.0.0");
    assert_eq!(value["v_minor"], "v1.1.0");
}

#[test]
fn test_strict_failure_exit_code() {
    let output = run(&mut next_semvers(&["1.2", "--strict"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1.2"));
}

#[test]
#[serial]
fn test_reads_action_inputs_from_env() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("github_output");

    let output = run(next_semvers(&[])
        .env("INPUT_VERSION", "release-0.3")
        .env("INPUT_MIN_VERSION", "v0.4.0")
        .env("GITHUB_OUTPUT", &path));

    assert!(output.status.success());
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("major=1.0.0\n"));
    assert!(content.contains("minor=0.4.0\n"));
    assert!(content.contains("patch=0.4.0\n"));
    assert!(content.contains("v_patch=v0.4.0\n"));
}

#[test]
fn test_invalid_config_file() {
    let output = run(&mut next_semvers(&[
        "1.0.0",
        "--config",
        "tests/fixtures/invalid_minimum.toml",
    ]));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("configuration"));
}

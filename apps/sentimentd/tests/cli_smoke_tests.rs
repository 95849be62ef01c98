#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the sentimentd binary
//!
//! These tests verify help/version output, configuration validation and the
//! `--print-config` dump.

use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Helper to run the sentimentd binary with given arguments
fn run_sentimentd(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sentimentd"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute sentimentd")
}

fn write_config(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_sentimentd(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sentimentd"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_sentimentd(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sentimentd"), "Should contain binary name");
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_sentimentd(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    for flag in ["--config", "-c"] {
        let output = run_sentimentd(&[flag, "/nonexistent/config.yaml", "check"]);

        assert!(
            !output.status.success(),
            "Should fail when config file doesn't exist ({flag})"
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("does not exist"),
            "Should indicate config file not found: {stderr}"
        );
    }
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_sentimentd(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("parse"),
        "Should mention YAML parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "valid.yaml",
        r#"
server:
  bind_addr: "127.0.0.1:5000"

logging:
  console_level: error
  format: json

modules:
  sentiment:
    config:
      extra_terms:
        meh: -0.2
"#,
    );

    let output = run_sentimentd(&["--config", &config_path, "check"]);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        eprintln!("STDERR: {stderr}");
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration is valid"),
        "Should indicate successful validation: {stdout}"
    );
}

#[test]
fn test_cli_check_rejects_bad_module_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "bad_module.yaml",
        r"
logging:
  console_level: error

modules:
  sentiment:
    config:
      extra_terms:
        broken: 3.5
",
    );

    let output = run_sentimentd(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Out-of-range polarity should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken"), "Should name the bad term: {stderr}");
}

#[test]
fn test_cli_run_command_invalid_bind_address() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "bad_addr.yaml",
        r#"
server:
  bind_addr: "not-an-address"

logging:
  console_level: error
"#,
    );

    let output = run_sentimentd(&["--config", &config_path, "run"]);

    assert!(
        !output.status.success(),
        "Should fail with invalid bind address"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("address"),
        "Should mention address parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let output = run_sentimentd(&["--print-config", "--port", "6123", "-vv"]);

    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let yaml = stdout
        .split_once("Effective configuration:")
        .map(|(_, rest)| rest)
        .expect("Should print header");

    let parsed: serde_json::Value =
        serde_saphyr::from_str(yaml).expect("Should print valid YAML");
    assert_eq!(parsed["server"]["bind_addr"], "0.0.0.0:6123");
    assert_eq!(parsed["logging"]["console_level"], "debug");
    assert_eq!(parsed["cors"]["allowed_origins"][0], "*");
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_sentimentd(&["run", "--help"]);
    assert!(output.status.success(), "Run subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Start the server"));

    let output = run_sentimentd(&["check", "--help"]);
    assert!(output.status.success(), "Check subcommand help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Validate configuration"));
}

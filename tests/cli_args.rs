//! Integration tests for CLI argument handling
//!
//! Runs the binary in `--once` mode against a saved forecast, and checks
//! that invalid flag values are rejected before anything is fetched.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("forecast.json")
}

/// Helper to run the CLI with given args and capture output
///
/// An empty settings file keeps the user's own config out of the test.
fn run_cli(args: &[&str]) -> std::process::Output {
    run_cli_with_config("", args)
}

/// Helper to run the CLI with the given settings file contents
fn run_cli_with_config(settings: &str, args: &[&str]) -> std::process::Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, settings).expect("Failed to write config");

    Command::new(env!("CARGO_BIN_EXE_inkweather"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("INKWEATHER_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute inkweather")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("inkweather"), "Help should mention inkweather");
    assert!(stdout.contains("--once"), "Help should mention --once flag");
    assert!(stdout.contains("--input"), "Help should mention --input flag");
}

#[test]
fn test_once_prints_snapshot_json() {
    let input = fixture();
    let output = run_cli(&["--once", "--input", input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "Expected --once to succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let snapshot: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(snapshot["daily_offset"], 1);
    assert_eq!(snapshot["current"]["update_timestamp"], "2024-06-15 14:30");
    assert_eq!(snapshot["current"]["wind_direction"], "SW");
    assert_eq!(snapshot["hours"][0]["hour_label"], "15");
    assert_eq!(snapshot["days"][0]["day_of_month"], "16");
    assert_eq!(snapshot["days"][0]["aggregated_code"], 1007);
}

#[test]
fn test_invalid_settings_file_fails() {
    let output = run_cli_with_config("[location]\nlatitude = 95.0\n", &["--once"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("latitude 95"), "{}", stderr);
}

#[test]
fn test_invalid_latitude_prints_error_and_exits() {
    let output = run_cli(&["--latitude", "123", "--once"]);
    assert!(!output.status.success(), "Expected invalid latitude to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("latitude"),
        "Should print error message about the latitude: {}",
        stderr
    );
}

#[test]
fn test_zero_interval_is_rejected() {
    let output = run_cli(&["--interval", "0", "--once"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid"), "{}", stderr);
}

#[test]
fn test_missing_input_file_fails() {
    let output = run_cli(&["--once", "--input", "/nonexistent/forecast.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_malformed_input_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, r#"{"current": {"time": "2024-06-15T14:30"}}"#).unwrap();

    let output = run_cli(&["--once", "--input", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "No snapshot on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("current.temperature_2m"), "{}", stderr);
}

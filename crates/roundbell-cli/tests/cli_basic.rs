//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Timer runs
//! use --silent and a one-second round so nothing is played and the test
//! finishes quickly.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "roundbell-cli", "--"])
        .args(args)
        .env("ROUNDBELL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_preset_list() {
    let (stdout, _stderr, code) = run_cli(&["preset", "list"]);
    assert_eq!(code, 0, "preset list failed");
    assert!(stdout.contains("boxing"));
    assert!(stdout.contains("hiit"));
}

#[test]
fn test_preset_list_json() {
    let (stdout, _stderr, code) = run_cli(&["preset", "list", "--json"]);
    assert_eq!(code, 0, "preset list --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let presets = parsed.as_array().expect("array of presets");
    assert!(presets.iter().any(|p| p["id"] == "boxing"));
}

#[test]
fn test_preset_show_unknown_fails() {
    let (_stdout, stderr, code) = run_cli(&["preset", "show", "definitely-not-a-preset"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_timer_run_silent_session() {
    let (stdout, _stderr, code) = run_cli(&[
        "timer",
        "run",
        "--silent",
        "--rounds",
        "1",
        "--round-secs",
        "1",
        "--rest-secs",
        "0",
        "--warning-secs",
        "0",
    ]);
    assert_eq!(code, 0, "timer run failed");
    assert!(stdout.contains("session started"));
    assert!(stdout.contains("session complete: 1 rounds"));
}

#[test]
fn test_timer_run_rejects_invalid_config() {
    let (_stdout, stderr, code) = run_cli(&[
        "timer",
        "run",
        "--silent",
        "--round-secs",
        "5",
        "--warning-secs",
        "5",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("warning time"));
}

#[test]
fn test_timer_run_json_events() {
    let (stdout, _stderr, code) = run_cli(&[
        "timer",
        "run",
        "--silent",
        "--json",
        "--rounds",
        "1",
        "--round-secs",
        "1",
        "--rest-secs",
        "0",
        "--warning-secs",
        "0",
    ]);
    assert_eq!(code, 0, "timer run --json failed");
    let mut types = Vec::new();
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        let event: serde_json::Value = serde_json::from_str(line).expect("JSON event line");
        types.push(event["type"].as_str().unwrap_or_default().to_string());
    }
    assert_eq!(types.first().map(String::as_str), Some("SessionStarted"));
    assert_eq!(types.last().map(String::as_str), Some("SessionCompleted"));
}

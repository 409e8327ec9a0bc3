//! End-to-end tests for `bandcode resolve`.

use std::process::Command;

/// Path to the bandcode binary
fn bandcode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bandcode")
}

fn run_resolve(args: &[&str]) -> std::process::Output {
    Command::new(bandcode_bin())
        .arg("resolve")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn json_output(output: &std::process::Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Should parse JSON")
}

#[test]
fn test_resolve_trims_unset_edges() {
    let output = run_resolve(&["_", "_", "red", "violet", "brown", "_", "_", "--json"]);
    let result = json_output(&output);

    assert_eq!(result["normal"]["ohms"].as_f64(), Some(270.0));
    assert_eq!(result["normal"]["tolerance"].as_f64(), Some(20.0));
    // brown/violet/red also decodes: 17 x100
    assert_eq!(result["reversed"]["ohms"].as_f64(), Some(1700.0));
}

#[test]
fn test_resolve_interior_gap_gives_no_reading() {
    let output = run_resolve(&["red", "_", "brown", "--json"]);
    let result = json_output(&output);

    assert!(result["normal"].is_null());
    assert!(result["reversed"].is_null());
}

#[test]
fn test_resolve_too_short_gives_no_reading() {
    let output = run_resolve(&["red", "brown", "--json"]);
    let result = json_output(&output);

    assert!(result["normal"].is_null());
    assert!(result["reversed"].is_null());
}

#[test]
fn test_resolve_one_direction_only() {
    // gold cannot lead as a digit, so only the reversed reading exists
    let output = run_resolve(&["gold", "red", "red", "--json"]);
    let result = json_output(&output);

    assert!(result["normal"].is_null());
    assert_eq!(result["reversed"]["digits"], serde_json::json!([2, 2]));
    assert_eq!(result["reversed"]["multiplier"].as_f64(), Some(0.1));
}

#[test]
fn test_resolve_plain_output_mentions_missing_reading() {
    let output = run_resolve(&["red", "_", "brown"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Normal:"));
    assert!(stdout.contains("Reversed:"));
    assert!(stdout.contains("no valid reading"));
}

#[test]
fn test_resolve_plain_output_both_readings() {
    let output = run_resolve(&["orange", "orange", "brown"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("330"));
    assert!(stdout.contains("13"));
}

#[test]
fn test_resolve_unknown_color_is_usage_error() {
    let output = run_resolve(&["mauve", "red", "brown"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'mauve' is not a resistor band color"));
}

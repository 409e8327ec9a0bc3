//! End-to-end tests for `bandcode decode`.

use std::process::Command;

/// Path to the bandcode binary
fn bandcode_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bandcode")
}

fn run_decode(args: &[&str]) -> std::process::Output {
    Command::new(bandcode_bin())
        .arg("decode")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_decode_four_band_json() {
    let output = run_decode(&["brown", "black", "red", "gold", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["bands"][0], "brown");
    assert_eq!(result["digits"], serde_json::json!([1, 0]));
    assert_eq!(result["multiplier"].as_f64(), Some(100.0));
    assert_eq!(result["tolerance"].as_f64(), Some(5.0));
    assert_eq!(result["ohms"].as_f64(), Some(1000.0));
    assert_eq!(result["display"], "1 kΩ ±5%");
}

#[test]
fn test_decode_three_band_default_tolerance() {
    let output = run_decode(&["orange", "orange", "brown", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["digits"], serde_json::json!([3, 3]));
    assert_eq!(result["multiplier"].as_f64(), Some(10.0));
    assert_eq!(result["tolerance"].as_f64(), Some(20.0));
    assert_eq!(result["ohms"].as_f64(), Some(330.0));
}

#[test]
fn test_decode_five_band_json() {
    let output = run_decode(&["red", "violet", "grey", "blue", "green", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["digits"], serde_json::json!([2, 7, 8]));
    assert_eq!(result["multiplier"].as_f64(), Some(1_000_000.0));
    assert_eq!(result["tolerance"].as_f64(), Some(0.5));
    assert_eq!(result["display"], "278 MΩ ±0.5%");
}

#[test]
fn test_decode_plain_output() {
    let output = run_decode(&["orange", "orange", "brown"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bands: orange orange brown"));
    assert!(stdout.contains("330"));
    assert!(stdout.contains("20%"));
}

#[test]
fn test_decode_accepts_case_and_gray_alias() {
    let output = run_decode(&["Gray", "BLACK", "red", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["bands"][0], "grey");
    assert_eq!(result["digits"], serde_json::json!([8, 0]));
    assert_eq!(result["ohms"].as_f64(), Some(8000.0));
}

#[test]
fn test_decode_two_bands_fails() {
    let output = run_decode(&["black", "black"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid band count 2"));
}

#[test]
fn test_decode_six_bands_unsupported() {
    let output = run_decode(&["brown", "black", "red", "gold", "green", "blue"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("6-band resistors are not supported"));
}

#[test]
fn test_decode_gold_as_digit_fails() {
    let output = run_decode(&["gold", "gold", "gold"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gold cannot be read as a digit band (position 0)"));
}

#[test]
fn test_decode_unknown_color_is_usage_error() {
    let output = run_decode(&["beige", "black", "red"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'beige' is not a resistor band color"));
}

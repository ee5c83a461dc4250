//! CLI integration tests

use std::process::Command;

fn fpe(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "-q", "-p", "footprint-cli", "--"])
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = fpe(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Serverless Footprint Estimator"),
        "Should show app name"
    );
    assert!(stdout.contains("estimate"), "Should show estimate command");
    assert!(stdout.contains("regions"), "Should show regions command");
    assert!(stdout.contains("health"), "Should show health command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = fpe(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("fpe"), "Should show binary name");
}

/// Test estimate subcommand help
#[test]
fn test_estimate_help() {
    let output = fpe(&["estimate", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Estimate help should succeed");
    for flag in [
        "--vcpu",
        "--memory-gb",
        "--concurrency",
        "--avg-duration-ms",
        "--requests-per-min",
        "--region",
        "--min-instances",
        "--max-instances",
        "--idle-utilization-pc",
        "--local",
    ] {
        assert!(stdout.contains(flag), "Should show {} option", flag);
    }
}

/// Test a local estimate rendered as JSON
#[test]
fn test_local_estimate_json() {
    let output = fpe(&[
        "--format",
        "json",
        "estimate",
        "--local",
        "--region",
        "asia-south1",
        "--requests-per-min",
        "600",
    ]);

    assert!(output.status.success(), "Local estimate should succeed");

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(result["risk_score"], 80);
    assert_eq!(result["assumptions"]["grid_intensity_g_per_kwh"], 700.0);
    assert!(result["suggested_yaml"]
        .as_str()
        .unwrap()
        .contains("region: europe-west4"));
}

/// Test the region listing
#[test]
fn test_regions_table() {
    let output = fpe(&["regions"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Regions should succeed");
    assert!(stdout.contains("europe-west4"));
    assert!(stdout.contains("asia-south1"));
    assert!(stdout.contains("450 g/kWh"));
}

/// Test that an unreachable API fails cleanly
#[test]
fn test_health_unreachable_api() {
    let output = fpe(&["--api-url", "http://127.0.0.1:9", "health"]);

    assert!(!output.status.success(), "Health should fail without a server");
}

//! Integration tests for the tripplanner CLI

use std::process::Command;

fn tripplanner() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tripplanner"))
}

/// Test that the CLI shows help with the explicit help flag
#[test]
fn test_cli_help() {
    let output = tripplanner()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tripplanner"));
    assert!(stdout.contains("verified place details"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--port"));
}

#[test]
fn test_cli_version() {
    let output = tripplanner()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

/// Test that an invalid config file stops startup before the server binds
#[test]
fn test_invalid_config_file_fails() {
    let path = std::env::temp_dir().join(format!("tripplanner-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("Failed to write config");

    let output = tripplanner()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid log level"),
        "expected log level error, got: {stderr}"
    );
}

/// Test environment overrides are validated like file values
#[test]
fn test_invalid_env_override_fails() {
    let path = std::env::temp_dir().join(format!("tripplanner-env-{}.toml", std::process::id()));
    std::fs::write(&path, "").expect("Failed to write config");

    let output = tripplanner()
        .env("TRIPPLANNER__PLACES__BASE_URL", "ftp://places.example.com")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("HTTP or HTTPS"),
        "expected base URL error, got: {stderr}"
    );
}

/// Test that an explicitly passed config file has to exist
#[test]
fn test_missing_config_file_fails() {
    let output = tripplanner()
        .args(["--config", "does/not/exist.toml"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config file not found"),
        "expected missing config error, got: {stderr}"
    );
}

#[test]
fn test_unknown_argument_is_rejected() {
    let output = tripplanner()
        .arg("--verbose-mode")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--verbose-mode"));
}

//! Integration tests: binary startup behaviour that does not need a terminal.

use std::path::PathBuf;
use std::process::Command;

fn fview() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fview"));
    // Keep test runs from touching the user's config and state directories.
    command
        .env("FVIEW_CONFIG", "/nonexistent/fview-test-config.toml")
        .env_remove("FVIEW_LAYOUT")
        .env_remove("FVIEW_IGNORE_CASE");
    command
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn binary_prints_version() {
    let output = fview()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn help_lists_flags() {
    let output = fview().arg("--help").output().expect("Failed to execute binary");
    let stdout = String::from_utf8_lossy(&output.stdout);

    for flag in [
        "--verbose",
        "--ignore-case",
        "--invert-match",
        "--pattern",
        "--regex",
        "--layout",
        "--config",
    ] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
}

#[test]
fn missing_file_argument_fails() {
    let output = fview().output().expect("Failed to execute binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn nonexistent_input_file_fails_before_tui() {
    let log_dir = std::env::temp_dir().join("fview_cli_missing_file");
    let output = fview()
        .arg("/nonexistent/input-for-fview.txt")
        .env("XDG_STATE_HOME", &log_dir)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("File not found"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_prefilter_fails_before_tui() {
    let log_dir = std::env::temp_dir().join("fview_cli_bad_prefilter");
    let output = fview()
        .args(["-e", "(unclosed"])
        .arg(fixture("sample.txt"))
        .env("XDG_STATE_HOME", &log_dir)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid prefilter"), "stderr: {stderr}");
}

#[test]
fn invalid_config_file_fails() {
    let config = std::env::temp_dir().join("fview_cli_invalid_config.toml");
    std::fs::write(&config, "layout = \"sideways\"\n").expect("write config");

    let output = fview()
        .arg("--config")
        .arg(&config)
        .arg(fixture("sample.txt"))
        .output()
        .expect("Failed to execute binary");
    let _ = std::fs::remove_file(&config);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Configuration error"), "stderr: {stderr}");
}

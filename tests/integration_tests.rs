use std::process::Command;

/// Integration tests for the reposhowcase CLI
/// These tests run the actual binary and verify its behavior

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(&["run", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Verify help contains expected commands
    assert!(stdout.contains("init"));
    assert!(stdout.contains("update"));
    assert!(stdout.contains("preview"));
}

#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(&["run", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("reposhowcase"));
}

#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(&["run", "--", "nonexistent-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized") || stderr.contains("invalid")
    );
}

#[test]
fn test_update_without_username_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yml");
    std::fs::write(&config_path, "readme_path: README.md\n").unwrap();

    let output = Command::new("cargo")
        .args(&[
            "run",
            "--",
            "--config",
            config_path.to_str().unwrap(),
            "update",
            "--dry-run",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("github.username"));
}

#[test]
fn test_help_subcommands() {
    let subcommands = vec!["init", "update", "preview"];

    for cmd in subcommands {
        let output = Command::new("cargo")
            .args(&["run", "--", cmd, "--help"])
            .output()
            .expect(&format!("Failed to execute {} help", cmd));

        assert!(output.status.success(), "Help for {} command failed", cmd);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.len() > 0, "Help output for {} was empty", cmd);
    }
}

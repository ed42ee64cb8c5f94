//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_stickerterm"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "--version should exit 0");
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn binary_rejects_malformed_config() {
    let config = std::env::temp_dir().join("stickerterm_version_test_bad_config.toml");
    std::fs::write(&config, "theme = \"monokai\"\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_stickerterm"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    std::fs::remove_file(&config).ok();

    assert!(!output.status.success(), "unknown config fields are fatal");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Config"),
        "Expected a configuration error, got: {}",
        stderr
    );
}

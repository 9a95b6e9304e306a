//! Config command integration tests

use std::process::Command;

use tempfile::TempDir;

fn parrot_bin(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_parrot"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}

fn temp_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn config_init_creates_file() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("created"),
        "Expected creation message, got: {}",
        stderr
    );
    assert!(home
        .path()
        .join("config")
        .join("parrot")
        .join("config.toml")
        .exists());
}

#[test]
fn config_init_twice_fails() {
    let home = temp_home();

    let first = parrot_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = parrot_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(
        stderr.contains("already exists"),
        "Expected already-exists error, got: {}",
        stderr
    );
}

#[test]
fn config_set_then_get_round_trip() {
    let home = temp_home();

    let set = parrot_bin(&home)
        .args(["config", "set", "notify", "true"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = parrot_bin(&home)
        .args(["config", "get", "notify"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    let stdout = String::from_utf8_lossy(&get.stdout);
    assert!(stdout.contains("true"), "Expected true, got: {}", stdout);
}

#[test]
fn config_set_volume() {
    let home = temp_home();

    let set = parrot_bin(&home)
        .args(["config", "set", "volume", "0.5"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = parrot_bin(&home)
        .args(["config", "get", "volume"])
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&get.stdout);
    assert!(stdout.contains("0.5"), "Expected 0.5, got: {}", stdout);
}

#[test]
fn config_get_unknown_key() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "set", "notify", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_set_out_of_range_volume() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "set", "volume", "2.5"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("0.0") || stderr.contains("1.0"),
        "Expected error about volume range, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let home = temp_home();

    let output = parrot_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") || stdout.contains("notify"),
        "Expected config list output, got: {}",
        stdout
    );
}

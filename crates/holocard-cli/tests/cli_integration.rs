//! CLI Integration Tests
//!
//! These tests exercise the offline `layers` command end-to-end plus argument
//! validation. Commands that reach the card API are not run here.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli_cmd() -> Command {
    Command::cargo_bin("holocard").expect("Failed to find holocard binary")
}

// ============================================================================
// Layers Command Tests
// ============================================================================

#[test]
fn test_layers_at_rest() {
    cli_cmd()
        .arg("layers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilt: x=0 y=0"))
        .stdout(predicate::str::contains("[border]"))
        .stdout(predicate::str::contains("[sparkle]"))
        .stdout(predicate::str::contains("[prism]"))
        .stdout(predicate::str::contains("[shine]"))
        .stdout(predicate::str::contains("[conic]"))
        .stdout(predicate::str::contains("linear-gradient(45deg"))
        .stdout(predicate::str::contains("linear-gradient(60deg"))
        .stdout(predicate::str::contains("linear-gradient(135deg"));
}

#[test]
fn test_layers_clamps_tilt() {
    cli_cmd()
        .args(["layers", "--tilt-x", "90", "--tilt-y", "-90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilt: x=45 y=-45"))
        // 45 + 2 * 45
        .stdout(predicate::str::contains("linear-gradient(135deg"))
        // 60 + 3 * 45
        .stdout(predicate::str::contains("linear-gradient(195deg"));
}

#[test]
fn test_layers_from_pointer_corner() {
    cli_cmd()
        .args(["layers", "--pointer", "0,0", "--viewport", "800,600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilt: x=-30 y=-30"))
        // 60 + 3 * -30
        .stdout(predicate::str::contains("linear-gradient(-30deg"));
}

#[test]
fn test_layers_from_pointer_center() {
    cli_cmd()
        .args(["layers", "--pointer", "400,300", "--viewport", "800,600"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tilt: x=0 y=0"));
}

#[test]
fn test_layers_json() {
    let output = cli_cmd()
        .args(["layers", "--tilt-x", "10", "--json"])
        .output()
        .expect("Failed to run holocard");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["tilt"]["x"], 10.0);
    assert_eq!(value["tilt"]["y"], 0.0);
    assert_eq!(value["layers"]["border"]["angle"], 65.0);
    assert_eq!(value["layers"]["prism"]["angle"], 90.0);
    assert_eq!(value["layers"]["shine"]["angle"], 175.0);
    assert!(value["styles"]["conic"]
        .as_str()
        .unwrap()
        .contains("pointer-events: none"));
}

#[test]
fn test_layers_rejects_empty_viewport() {
    cli_cmd()
        .args(["layers", "--pointer", "1,1", "--viewport", "0,600"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive width and height"));
}

#[test]
fn test_layers_pointer_requires_viewport() {
    cli_cmd()
        .args(["layers", "--pointer", "1,1"])
        .assert()
        .failure();
}

#[test]
fn test_layers_rejects_malformed_pair() {
    cli_cmd()
        .args(["layers", "--pointer", "12", "--viewport", "800,600"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("comma separated"));
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("card"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("layers"));
}

#[test]
fn test_unknown_command_fails() {
    cli_cmd().arg("shuffle").assert().failure();
}

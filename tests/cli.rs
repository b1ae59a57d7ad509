//! End-to-end tests for the `periph` binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use common::fixtures::TestWorkspace;

fn periph(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("periph").expect("periph binary builds");
    cmd.env("PERIPH_DB", ws.db_path())
        .env("PERIPH_PREFS", ws.preferences_path())
        .env_remove("RUST_LOG")
        .env_remove("PERIPH_FORMAT");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_types_robot_lists_all() {
    let ws = TestWorkspace::new();
    let output = periph(&ws).args(["types", "--robot"]).output().unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    let types = json.as_array().unwrap();
    assert_eq!(types.len(), 17);
    let bluereader = types.iter().find(|t| t["id"] == "bluereader").unwrap();
    assert!(bluereader["configuration_strategy"].is_null());
    assert_eq!(bluereader["category"], "cgm");
}

#[test]
fn test_info_by_label() {
    let ws = TestWorkspace::new();
    periph(&ws)
        .args(["info", "Libre 2 EU / 2+ EU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("libre2"))
        .stdout(predicate::str::contains("NFC scan before connect: yes"));
}

#[test]
fn test_unknown_type_is_error() {
    let ws = TestWorkspace::new();
    periph(&ws)
        .args(["info", "pebble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown device type: pebble"));
}

#[test]
fn test_validate_exit_codes() {
    let ws = TestWorkspace::new();
    periph(&ws)
        .args(["validate", "dexcom", "AB12CD"])
        .assert()
        .success();

    let output = periph(&ws)
        .args(["validate", "dexcom", "AB12!D", "--format", "json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["valid"], false);
    assert_eq!(json["message_id"], "dexcom_transmitter_id_invalid_characters");
}

#[test]
fn test_pair_list_remove() {
    let ws = TestWorkspace::new();

    periph(&ws)
        .args(["pair", "dexcom_g4", "G4:01", "xBridge", "-t", "6AB12", "--robot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"transmitter_id\": \"6AB12\""));

    let output = periph(&ws).args(["list", "--robot"]).output().unwrap();
    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["peripheral_type"], "dexcom_g4");

    periph(&ws).args(["remove", "G4:01"]).assert().success();
    periph(&ws)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored peripherals"));
}

#[test]
fn test_pair_missing_transmitter_id_robot_error() {
    let ws = TestWorkspace::new();
    let output = periph(&ws)
        .args(["pair", "blucon", "BL:01", "BLU", "--robot"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: Value = serde_json::from_slice(&output.stderr).expect("stderr is JSON");
    assert_eq!(err["error"], true);
    assert_eq!(err["recoverable"], true);
}

#[test]
fn test_pair_duplicate_address() {
    let ws = TestWorkspace::new();
    periph(&ws)
        .args(["pair", "bubble", "AA:01", "Bubble"])
        .assert()
        .success();
    periph(&ws)
        .args(["pair", "miaomiao", "AA:01", "MiaoMiao"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already stored"));
}

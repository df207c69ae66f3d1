//! Smoke tests for the keycalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("KEYCALC_CONFIG")
        .env_remove("KEYCALC_STATE")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keypad"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

#[test]
fn test_keypad_layout() {
    keycalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ 7 ] [ 8 ] [ 9 ] [ ÷ ]"))
        .stdout(predicate::str::contains("[ C ]"));
}

// ============================================================================
// Eval Tests
// ============================================================================

#[test]
fn test_eval_chained() {
    keycalc()
        .args(["eval", "2+3*4="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_concatenates_arguments() {
    keycalc()
        .args(["eval", "9", "/", "2", "="])
        .assert()
        .success()
        .stdout("4.50\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "5/0="])
        .assert()
        .success()
        .stdout("Error\n")
        .stderr(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_eval_quiet_suppresses_warnings() {
    keycalc()
        .args(["-q", "eval", "5/0="])
        .assert()
        .success()
        .stdout("Error\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_eval_long_result_hints_clear() {
    keycalc()
        .args(["eval", "9999999999*9999999999=+"])
        .assert()
        .success()
        .stdout("99999999980000000000\n")
        .stderr(predicate::str::contains("press C to clear"));
}

#[test]
fn test_eval_rounds_half_cent_up() {
    keycalc()
        .args(["eval", "1/8="])
        .assert()
        .success()
        .stdout("0.13\n");
}

#[test]
fn test_eval_unknown_key_fails() {
    keycalc()
        .args(["eval", "2+(3)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key"));
}

#[test]
fn test_eval_trace() {
    keycalc()
        .args(["eval", "--trace", "1+2="])
        .assert()
        .success()
        .stdout("1 -> 1\n+ -> 1\n2 -> 2\n= -> 3\n");
}

#[test]
fn test_eval_json() {
    let output = keycalc()
        .args(["eval", "--format", "json", "7*"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"], "7");
    assert_eq!(value["expression"], "7 ×");
}

// ============================================================================
// Config and State Tests
// ============================================================================

#[test]
fn test_config_file_limits_input() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("keycalc.yaml");
    fs::write(&config, "max_input_len: 3\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&config)
        .args(["eval", "12345"])
        .assert()
        .success()
        .stdout("123\n")
        .stderr(predicate::str::contains("Number too long"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("keycalc.yaml");
    fs::write(&config, "max_input_len: many\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&config)
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_state_file_resumes() {
    let dir = TempDir::new().unwrap();
    let state = dir.path().join("state.json");

    keycalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "12+"])
        .assert()
        .success()
        .stdout("12\n");
    assert!(state.exists());

    keycalc()
        .arg("--state")
        .arg(&state)
        .args(["eval", "30="])
        .assert()
        .success()
        .stdout("42\n");
}

// ============================================================================
// REPL Tests
// ============================================================================

#[test]
fn test_repl_reads_lines() {
    keycalc()
        .arg("repl")
        .write_stdin("2+\n3*\n4=\nq\n")
        .assert()
        .success()
        .stdout("2\n5\n20\n");
}

// textmask/tests/cli_integration_tests.rs
//! Command-line integration tests for the `textmask` binary.
//!
//! The binary is run with `assert_cmd`; `tempfile` provides isolated mask
//! configuration files.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn textmask() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("textmask"));
    cmd.env_remove("TEXTMASK_CONFIG");
    cmd.env("RUST_LOG", "debug");
    cmd
}

#[test]
fn test_mask_with_pattern() {
    textmask()
        .args(["mask", "--pattern", "(999) 999-9999", "5551234567"])
        .assert()
        .success()
        .stdout("(555) 123-4567\n");
}

#[test]
fn test_mask_partial_value() {
    textmask()
        .args(["mask", "-p", "(999) 999-9999", "555123"])
        .assert()
        .success()
        .stdout("(555) 123\n");
}

#[test]
fn test_unmask_named_mask() {
    textmask()
        .args(["unmask", "--name", "phone", "(555) 123-4567"])
        .assert()
        .success()
        .stdout("5551234567\n");
}

#[test]
fn test_mask_reads_stdin_lines() {
    textmask()
        .args(["mask", "--type", "cpf"])
        .write_stdin("52998224725\n11222\n")
        .assert()
        .success()
        .stdout("529.982.247-25\n112.22\n");
}

#[test]
fn test_validate_exit_status() {
    textmask()
        .args(["validate", "--type", "cpf", "52998224725"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));

    textmask()
        .args(["validate", "--type", "cpf", "52998224726"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("incomplete"));
}

#[test]
fn test_unknown_type_passes_through() {
    textmask()
        .args(["mask", "--type", "iban", "DE89 3704"])
        .assert()
        .success()
        .stdout("DE89 3704\n");
}

#[test]
fn test_json_output() {
    textmask()
        .args(["mask", "--type", "money", "--json", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""display":"R$1.234,56""#))
        .stdout(predicate::str::contains(r#""raw":"123456""#));
}

#[test]
fn test_invalid_options_json_fails() {
    textmask()
        .args(["mask", "--type", "money", "--options", "{not json", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --options JSON"));
}

#[test]
fn test_user_config_is_merged() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"masks:\n  - name: plate\n    type: custom\n    options:\n      mask: \"AAA-9999\"\n")?;
    let path = file.path().to_str().unwrap().to_string();

    textmask()
        .args(["mask", "--config", &path, "--name", "plate", "abc1234"])
        .assert()
        .success()
        .stdout("abc-1234\n");

    textmask()
        .args(["list", "--config", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("plate").and(predicate::str::contains("cel_phone")));
    Ok(())
}

#[test]
fn test_options_layer_over_named_mask() {
    textmask()
        .args(["mask", "--name", "usd", "--options", r#"{"precision": 3}"#, "123456"])
        .assert()
        .success()
        .stdout("$123.456\n");
}

#[test]
fn test_missing_config_fails() {
    textmask()
        .args(["list", "--config", "definitely-not-a-textmask-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_unknown_name_fails() {
    textmask()
        .args(["mask", "--name", "does-not-exist", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No mask named 'does-not-exist'"));
}

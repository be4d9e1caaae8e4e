//! End-to-end smoke tests for the tabsplit binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tabsplit() -> Command {
    Command::cargo_bin("tabsplit").expect("binary builds")
}

#[test]
fn equal_split_renders_reconciled_amounts() {
    tabsplit()
        .args(["equal", "--total", "100", "--people", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("34.00"))
        .stdout(predicate::str::contains("Total"))
        .stdout(predicate::str::contains("100.00"));
}

#[test]
fn unbalanced_percentages_fail_with_hint() {
    tabsplit()
        .args(["percentage", "--total", "100", "--values", "50,49"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("add up to 99%"))
        .stderr(predicate::str::contains("--auto-fix"));
}

#[test]
fn auto_fix_repairs_percentages_and_succeeds() {
    tabsplit()
        .args(["percentage", "--total", "100", "--values", "50,49", "--auto-fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total"));
}

#[test]
fn order_split_emits_json() {
    let output = tabsplit()
        .args(["order", "--values", "30,70", "--tax", "10", "--json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(result["amounts"], serde_json::json!([33.0, 77.0]));
    assert_eq!(result["rounded"], true);
}

#[test]
fn file_input_round_trips_through_the_engine() {
    let dir = std::env::temp_dir();
    let path = dir.join("tabsplit-cli-test-bill.json");
    std::fs::write(
        &path,
        r#"{
            "policy": "share",
            "participants": [
                { "name": "Ana", "value": 1.0 },
                { "name": null, "value": 1.0 },
                { "name": null, "value": 2.0 }
            ],
            "declared_total": 100.0,
            "tax_enabled": false,
            "tax_percent": 12.0,
            "rounding_enabled": true
        }"#,
    )
    .expect("fixture written");

    tabsplit()
        .arg("file")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("50.00"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn zero_shares_are_a_validation_error() {
    tabsplit()
        .args(["share", "--total", "100", "--values", "0,0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greater than 0"));
}

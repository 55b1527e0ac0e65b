//! `hffe check-quotes`: verdict on stdout, strict-mode failure as exit code.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn hffe() -> Command {
    Command::cargo_bin("hffe").unwrap()
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, contents).unwrap();
    p
}

#[test]
fn liquid_series_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let q = write(&dir, "q.csv", "1.20,1.35,P\n1.22,1.37,P\n");

    hffe()
        .arg("check-quotes")
        .arg(&q)
        .assert()
        .success()
        .stdout(predicate::str::diff("ACCEPTED\n"));
}

#[test]
fn zero_bid_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let q = write(&dir, "q.csv", "0,1.35,P\n1.22,1.37,P\n");

    hffe()
        .arg("check-quotes")
        .arg(&q)
        .assert()
        .success()
        .stdout(predicate::str::contains("REJECTED: zero_bid"));
}

#[test]
fn config_policy_adds_is_put() {
    let dir = tempfile::tempdir().unwrap();
    let q = write(&dir, "q.csv", "1.20,1.35,C\n1.22,1.37,C\n");
    let cfg = write(
        &dir,
        "liq.yaml",
        "liquidity:\n  conditions: [zero_bid, zero_ask, stale_prices, is_put]\n",
    );

    hffe()
        .arg("check-quotes")
        .arg("--config")
        .arg(&cfg)
        .arg(&q)
        .assert()
        .success()
        .stdout(predicate::str::contains("REJECTED: is_put"));
}

#[test]
fn mixed_types_reject_leniently_and_fail_strictly() {
    let dir = tempfile::tempdir().unwrap();
    let q = write(&dir, "q.csv", "1.20,1.35,P\n1.22,1.37,C\n");

    hffe()
        .arg("check-quotes")
        .arg(&q)
        .assert()
        .success()
        .stdout(predicate::str::contains("REJECTED: mixed_option_type"));

    hffe()
        .args(["check-quotes", "--strict"])
        .arg(&q)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mixed option types"));
}

#[test]
fn unknown_condition_in_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let q = write(&dir, "q.csv", "1.20,1.35,P\n1.22,1.37,P\n");
    let cfg = write(&dir, "liq.yaml", "liquidity:\n  conditions: [tight_spread]\n");

    hffe()
        .arg("check-quotes")
        .arg("--config")
        .arg(&cfg)
        .arg(&q)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tight_spread"));
}

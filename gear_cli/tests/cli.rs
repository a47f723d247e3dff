//! Integration tests for the gear-calc binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path to the shipped reference data.
fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn gear_calc() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gear-calc");
    cmd.env("RUST_LOG", "error").arg("--data-dir").arg(data_dir());
    cmd
}

#[test]
fn compose_prints_total() {
    gear_calc()
        .args([
            "--keys",
            "luk,watk,hp",
            "compose",
            "--gear",
            "absolab_bandit_hat",
            "--stars",
            "17",
            "--flame",
            "luk=40",
            "--flame",
            "allStat=5",
            "--set-pieces",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("AbsoLab Bandit Hat (hat, level 160, 17 stars)"))
        .stdout(predicate::str::contains("total      LUK: 151  WATK: 79  HP: 2115"));
}

#[test]
fn compose_clamps_stars_to_item_cap() {
    gear_calc()
        .args(["--keys", "dex", "compose", "--gear", "tyrant_hermes_cloak", "--stars", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15 stars"))
        .stdout(predicate::str::contains("DEX: 370"));
}

#[test]
fn compose_breakdown_lists_sources() {
    gear_calc()
        .args([
            "compose",
            "--gear",
            "absolab_bandit_hat",
            "--stars",
            "10",
            "--pot",
            "a_luk:legendary",
            "--breakdown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("star force"))
        .stdout(predicate::str::contains("potential  LUK: 11"));
}

#[test]
fn compose_json_output() {
    gear_calc()
        .args(["compose", "--gear", "superior_gollux_belt", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gear\": \"superior_gollux_belt\""))
        .stdout(predicate::str::contains("\"potential\""));
}

#[test]
fn compose_unknown_gear_fails() {
    gear_calc()
        .args(["compose", "--gear", "no_such_hat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown gear id `no_such_hat`"));
}

#[test]
fn compose_rejects_malformed_flame() {
    gear_calc()
        .args(["compose", "--gear", "absolab_bandit_hat", "--flame", "luk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("STAT=VALUE"));
}

#[test]
fn lookup_armor_hat() {
    gear_calc()
        .args(["lookup", "--level", "160", "--stars", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STR: 66"))
        .stdout(predicate::str::contains("WATK: 21  MATT: 21"))
        .stdout(predicate::str::contains("HP: 255"));
}

#[test]
fn lookup_gloves_has_no_hp() {
    gear_calc()
        .args(["lookup", "--level", "160", "--stars", "17", "--slot", "gloves"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HP:").not());
}

#[test]
fn compare_sample_session() {
    gear_calc()
        .args(["--keys", "luk"])
        .arg("compare")
        .arg(data_dir().join("comparison.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[hat]"))
        .stdout(predicate::str::contains("[total]\n  stats:     LUK: +64"))
        .stdout(predicate::str::contains("potential: LUK: +3%"));
}

#[test]
fn compare_json_output() {
    gear_calc()
        .arg("compare")
        .arg(data_dir().join("comparison.toml"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"statDiff\""))
        .stdout(predicate::str::contains("\"potentialDiff\""));
}

#[test]
fn compare_missing_gear_reports_no_difference() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let session = temp_dir.path().join("session.json");
    fs::write(
        &session,
        r#"{ "slots": [ { "label": "ring", "gearA": "missing_ring", "gearB": "superior_gollux_ring" } ] }"#,
    )
    .expect("write session");

    gear_calc()
        .arg("compare")
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ring]\n  stats:     No difference"));
}

#[test]
fn compare_tolerates_rough_slots() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let session = temp_dir.path().join("session.toml");
    fs::write(
        &session,
        r#"
[[slots]]
label = "ring"
gearA = "superior_gollux_ring"
gearB = "superior_gollux_ring"
configA = { stars = -3 }
configB = { potLines = [{ rank = "Epic" }, { lineId = "a_luk", rank = "Mythic" }] }
"#,
    )
    .expect("write session");

    gear_calc()
        .arg("compare")
        .arg(&session)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ring]"));
}

#[test]
fn missing_data_file_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    fs::write(temp_dir.path().join("gear.json"), r#"{ "gear": [] }"#).expect("write gear");

    let mut cmd = cargo_bin_cmd!("gear-calc");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load reference data"));
}

#[test]
fn list_filters_by_slot_and_class() {
    gear_calc()
        .args(["--class", "luk-thief", "list", "--slot", "hat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("absolab_bandit_hat"))
        .stdout(predicate::str::contains("arcane_umbra_thief_hat"))
        .stdout(predicate::str::contains("superior_gollux_ring").not());
}

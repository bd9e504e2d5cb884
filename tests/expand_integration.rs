//! Integration tests for the expand subcommand.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_cfg(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_expand_counts_grid_variants() {
    let cfg = write_cfg(
        "EXP_NAME: grid\nDATASET:\n  BATCH_SIZE: [32, 64]\n  PIN_MEMORY: [true, false]\n",
    );

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand").arg("--cfg").arg(cfg.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4 experiment variant(s)"))
        .stdout(predicate::str::contains(
            "DATASET.BATCH_SIZE, DATASET.PIN_MEMORY",
        ))
        .stdout(predicate::str::contains(
            "dataset.batchsize-32dataset.pinmemory-true",
        ));
}

#[test]
fn test_expand_single_variant_without_axes() {
    let cfg = write_cfg("EXP_NAME: plain\nOPTIMIZER:\n  LR: 0.001\n");

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand").arg("--cfg").arg(cfg.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 experiment variant(s)"))
        .stdout(predicate::str::contains("[0] plain"));
}

#[test]
fn test_expand_json_summary() {
    let cfg = write_cfg("EXP_NAME: grid\nOPTIMIZER:\n  LR: [0.001, 0.0001]\n");

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand").arg("--cfg").arg(cfg.path()).arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"num_variants\": 2"))
        .stdout(predicate::str::contains("\"OPTIMIZER.LR\""))
        .stdout(predicate::str::contains("optimizer.lr-0.0001"));
}

#[test]
fn test_expand_excluded_key_is_not_an_axis() {
    let cfg = write_cfg("DATASET:\n  TRAIN_DS: [h36m, coco]\n");

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand")
        .arg("--cfg")
        .arg(cfg.path())
        .arg("--exclude")
        .arg("DATASET.TRAIN_DS");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 experiment variant(s)"));
}

#[test]
fn test_expand_rejects_unknown_key() {
    let cfg = write_cfg("RENDERER: mesh\n");

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand").arg("--cfg").arg(cfg.path());

    cmd.assert().failure().stderr(predicate::str::contains(
        "unknown hyperparameter 'RENDERER'",
    ));
}

#[test]
fn test_expand_rejects_missing_excluded_key() {
    let cfg = write_cfg("EXP_NAME: grid\n");

    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand")
        .arg("--cfg")
        .arg(cfg.path())
        .arg("--exclude")
        .arg("DATASET.MISSING");

    cmd.assert().failure().stderr(predicate::str::contains(
        "excluded key 'DATASET.MISSING' not present",
    ));
}

#[test]
fn test_expand_rejects_missing_file() {
    let mut cmd = cargo_bin_cmd!("poselab");
    cmd.arg("expand").arg("--cfg").arg("/nonexistent/grid.yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn spoke() -> Command {
    Command::cargo_bin("spoke").unwrap()
}

const FRONT_ARGS: [&str; 17] = [
    "calc",
    "--erd", "600",
    "--flange-diameter-left", "45",
    "--flange-diameter-right", "45",
    "--flange-offset-left", "35",
    "--flange-offset-right", "35",
    "--spoke-count", "32",
    "--cross-left", "3",
    "--cross-right", "3",
];

#[test]
fn calc_prints_report() {
    spoke()
        .args(FRONT_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("SPOKE CALCULATION RESULTS"))
        .stdout(predicate::str::contains("292.9"))
        .stdout(predicate::str::contains("3-cross / 3-cross"));
}

#[test]
fn calc_json_output_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("front.json");

    let assert = spoke()
        .args(FRONT_ARGS)
        .arg("--json")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let printed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(printed["spoke_length_left_rounded"], 292.0);
    assert_eq!(printed["tension_percent_right"], 100.0);

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(saved["spoke_length_right_rounded"], 292.0);
}

#[test]
fn calc_reports_invalid_dimension() {
    let mut args = FRONT_ARGS;
    args[12] = "0";
    assert_eq!(FRONT_ARGS[11], "--spoke-count");

    spoke()
        .args(args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("spoke_count"))
        .stderr(predicate::str::contains("Check the rim and hub measurements"))
        .stderr(predicate::str::contains("\"type\": \"InvalidDimension\""));
}

#[test]
fn calc_rejects_nan_hole_diameter() {
    spoke()
        .args(FRONT_ARGS)
        .args(["--spoke-hole-diameter", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spoke_hole_diameter"))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn file_applies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rear.json");
    fs::write(
        &path,
        r#"{
            "erd": 600.0,
            "flange_diameter_left": 45.0,
            "flange_diameter_right": 45.0,
            "flange_offset_left": 20.5,
            "flange_offset_right": 37.5,
            "spoke_count": 32,
            "cross_pattern_left": 3,
            "cross_pattern_right": 3
        }"#,
    )
    .unwrap();

    spoke()
        .arg("file")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tension_percent_right\": 54.7"))
        .stdout(predicate::str::contains("\"spoke_length_right_rounded\": 294.0"));
}

#[test]
fn file_missing_is_an_error() {
    spoke()
        .args(["file", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FileError"))
        .stderr(predicate::str::contains("Check the rim and hub").not());
}

#[test]
fn sheet_renders_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("build.json");
    fs::write(
        &path,
        r#"{
            "customer_name": "Sam Example",
            "rim": { "manufacturer": "DT Swiss", "model": "RR 411", "iso_size": 622, "erd": 600.0 },
            "hub": {
                "manufacturer": "Shimano",
                "model": "FH-R7000",
                "position": "rear",
                "flange_diameter_left": 45.0,
                "flange_diameter_right": 45.0,
                "flange_offset_left": 20.5,
                "flange_offset_right": 37.5
            },
            "lacing": { "spoke_count": 32, "cross_pattern_left": 3, "cross_pattern_right": 3 },
            "customer_notes": "Pick up Friday"
        }"#,
    )
    .unwrap();

    spoke()
        .arg("sheet")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WHEEL BUILD SHEET"))
        .stdout(predicate::str::contains("Left:   292 mm x 16"))
        .stdout(predicate::str::contains("Right:  294 mm x 16"))
        .stdout(predicate::str::contains("Pick up Friday"));
}

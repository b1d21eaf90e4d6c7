//! CLI-level tests running the compiled binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn camevents() -> Command {
    Command::cargo_bin("camevents").unwrap()
}

fn write_observations(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("observations.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "observationID,deploymentID,observationType,scientificName,eventStart"
    )
    .unwrap();
    writeln!(file, "obs1,dep1,animal,Vulpes vulpes,2024-06-01T00:00:00Z").unwrap();
    writeln!(file, "obs2,dep1,animal,Vulpes vulpes,2024-06-01T00:01:00Z").unwrap();
    writeln!(file, "obs3,dep1,animal,Vulpes vulpes,2024-06-01T00:10:00Z").unwrap();
    path
}

#[test]
fn test_help_mentions_threshold() {
    camevents()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--threshold"))
        .stdout(predicate::str::contains("--in-place"));
}

#[test]
fn test_basic_run_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = write_observations(&dir);
    let output = dir.path().join("out.csv");

    camevents()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    // BOM is on by default.
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let mut reader = csv::Reader::from_path(&output).unwrap();
    assert!(reader.headers().unwrap().iter().any(|h| h == "eventID"));
    assert_eq!(reader.records().count(), 3);
}

#[test]
fn test_no_csv_bom_flag() {
    let dir = TempDir::new().unwrap();
    let input = write_observations(&dir);
    let output = dir.path().join("out.csv");

    camevents()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--no-csv-bom")
        .arg("-q")
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert_ne!(&bytes[..3], b"\xEF\xBB\xBF");
}

#[test]
fn test_invalid_threshold_rejected_at_parse() {
    let dir = TempDir::new().unwrap();
    let input = write_observations(&dir);

    camevents()
        .arg(&input)
        .arg("-t")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn test_overwrite_without_in_place_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_observations(&dir);

    camevents()
        .arg(&input)
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-place"));

    // Input untouched on failure.
    let contents = std::fs::read_to_string(&input).unwrap();
    assert!(!contents.contains("eventID"));
}

#[test]
fn test_in_place_run_annotates_input() {
    let dir = TempDir::new().unwrap();
    let input = write_observations(&dir);

    camevents()
        .arg(&input)
        .arg("--in-place")
        .arg("-q")
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&input).unwrap();
    assert!(reader.headers().unwrap().iter().any(|h| h == "eventID"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    camevents()
        .arg(dir.path().join("nope.csv"))
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_bad_configured_threshold_fails_fast() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("camevents");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[defaults]\nthreshold_secs = -5.0\n",
    )
    .unwrap();
    let input = write_observations(&dir);
    let output = dir.path().join("out.csv");

    camevents()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid gap threshold"));
    assert!(!output.exists());

    // Config inspection still works with the broken value in place.
    camevents()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("-5"));
}

#[test]
fn test_config_path_prints_toml_path() {
    camevents()
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tests for the `kpolyext` binary.

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kpolyext() -> Command {
    Command::cargo_bin("kpolyext").unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    kpolyext()
        .write_stdin(format!("{}\n", POINT))
        .assert()
        .success()
        .stdout("0,0 3,1\n0,0 1,1 2,1 3,2\n");
}

#[test]
fn test_all_flag() {
    kpolyext()
        .arg("--all")
        .write_stdin(format!("{}\n", POINT))
        .assert()
        .success()
        .stdout("2,0 3,1\n0,0 3,1\n0,0 1,1 2,1 3,2\n");
}

#[test]
fn test_max_rank_zero() {
    kpolyext()
        .args(["--all", "-c", "0"])
        .write_stdin(format!("{}\n", FREE_PAIR))
        .assert()
        .success()
        .stdout("4,0 5,1 6,1 7,2\n");
}

#[test]
fn test_label_output_is_stable() {
    let first = kpolyext()
        .arg("--label")
        .write_stdin(format!("{}\n", RANK_ONE_PAIR))
        .output()
        .unwrap();
    assert!(first.status.success());
    let labeled = String::from_utf8(first.stdout).unwrap();
    assert_eq!(labeled.lines().count(), 1);

    kpolyext().arg("--label").write_stdin(labeled.clone()).assert().success().stdout(labeled);
}

#[test]
fn test_files_in_and_out() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, format!("{}\n\n{}\n", POINT, FREE_PAIR)).unwrap();

    kpolyext().arg(&input).arg(&output).assert().success().stdout("");

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(&lines[..2], ["0,0 3,1", "0,0 1,1 2,1 3,2"]);
    for line in &lines[2..] {
        let e: kpoly_ext::Polymatroid = line.parse().unwrap();
        assert_eq!(e.ground_size(), 3);
    }
}

#[test]
fn test_verbose_goes_to_stderr() {
    kpolyext()
        .arg("-v")
        .write_stdin(format!("{}\n", POINT))
        .assert()
        .success()
        .stdout(predicate::str::contains("[Extender]").not())
        .stderr(predicate::str::contains("[Extender] line 1: candidates=3"));
}

#[test]
fn test_bad_record_reports_line() {
    kpolyext()
        .write_stdin("0,0 1,1\n0,0 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("malformed token '1'"));
}

#[test]
fn test_invalid_lattice_is_rejected() {
    kpolyext()
        .write_stdin("0,0 1,1 2,1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ground set"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    kpolyext()
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open input"));
}

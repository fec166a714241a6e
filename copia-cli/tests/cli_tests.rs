//! CLI smoke tests against the compiled `copia` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn classification_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A\tB").unwrap();
    for row in [[1, 1], [1, 2], [2, 3], [0, 0], [0, 0]] {
        writeln!(file, "{}\t{}", row[0], row[1]).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn curve_csv_output_matches_hand_computed_counts() {
    let table = classification_table();

    Command::cargo_bin("copia")
        .unwrap()
        .args([
            "curve",
            table.path().to_str().unwrap(),
            "--fractions",
            "1",
            "--threshold",
            "2",
            "--repeats",
            "5",
            "--dispersion",
            "sd",
            "--seed",
            "7",
            "--format",
            "csv",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample,fraction,mean,dispersion"))
        .stdout(predicate::str::contains("A,1.0,1.0,0.0"))
        .stdout(predicate::str::contains("B,1.0,0.0,0.0"));
}

#[test]
fn curve_json_output_contains_points() {
    let table = classification_table();

    Command::cargo_bin("copia")
        .unwrap()
        .args([
            "curve",
            table.path().to_str().unwrap(),
            "--fractions",
            "0,1",
            "--repeats",
            "3",
            "--dispersion",
            "none",
            "--format",
            "json",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sample\": \"A\""))
        .stdout(predicate::str::contains("\"fraction\": 1.0"));
}

#[test]
fn curve_table_output_prints_summary_and_chart() {
    let table = classification_table();

    Command::cargo_bin("copia")
        .unwrap()
        .args([
            "curve",
            table.path().to_str().unwrap(),
            "--fractions",
            "1",
            "--repeats",
            "2",
            "--dispersion",
            "none",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accumulation curve"))
        .stdout(predicate::str::contains("threshold: 2"))
        .stdout(predicate::str::contains("Mean taxa"));
}

#[test]
fn curve_writes_output_file() {
    let table = classification_table();
    let out = NamedTempFile::new().unwrap();

    Command::cargo_bin("copia")
        .unwrap()
        .args([
            "curve",
            table.path().to_str().unwrap(),
            "--fractions",
            "1",
            "--repeats",
            "2",
            "--dispersion",
            "none",
            "--format",
            "csv",
            "--quiet",
            "--output",
            out.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(out.path()).unwrap();
    assert!(written.starts_with("sample,fraction,mean,dispersion"));
    assert!(written.contains("A,1.0,1.0,0.0"));
}

#[test]
fn invalid_fraction_exits_with_argument_error() {
    let table = classification_table();

    Command::cargo_bin("copia")
        .unwrap()
        .args([
            "curve",
            table.path().to_str().unwrap(),
            "--fractions",
            "2",
            "--quiet",
        ])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("fraction must be in [0, 1]"));
}

#[test]
fn missing_file_exits_with_io_error() {
    Command::cargo_bin("copia")
        .unwrap()
        .args(["curve", "/nonexistent/reads.tsv", "--quiet"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn malformed_table_exits_with_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A\tB").unwrap();
    writeln!(file, "1\tnot-a-taxon").unwrap();
    file.flush().unwrap();

    Command::cargo_bin("copia")
        .unwrap()
        .args(["curve", file.path().to_str().unwrap(), "--quiet"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("invalid taxon id"));
}

#[test]
fn stats_prints_per_sample_summary() {
    let table = classification_table();

    Command::cargo_bin("copia")
        .unwrap()
        .args(["stats", table.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample"))
        .stdout(predicate::str::contains("Distinct taxa"))
        .stdout(predicate::str::contains("40.0%"));
}

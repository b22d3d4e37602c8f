//! Integration tests for the age-calculator binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn calc() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("age-calculator"));
    cmd.arg("calc");
    cmd
}

#[test]
fn calc_known_date() {
    calc()
        .args(["--day", "1", "--month", "1", "--year", "2000", "--now", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: January 1, 2000"))
        .stdout(predicate::str::contains("24 years"))
        .stdout(predicate::str::contains("0 months"))
        .stdout(predicate::str::contains("6 days"));
}

#[test]
fn calc_rolls_over_out_of_range_day() {
    calc()
        .args(["--day", "32", "--month", "1", "--year", "2023", "--now", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: February 1, 2023"))
        .stderr(predicate::str::contains("day is out of range (max 31)"));
}

#[test]
fn calc_unparseable_field_prints_nan() {
    calc()
        .args(["--day", "", "--month", "1", "--year", "2000", "--now", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date:").not())
        .stdout(predicate::str::contains("NaN years"))
        .stdout(predicate::str::contains("NaN days"));
}

#[test]
fn calc_future_date_still_succeeds() {
    calc()
        .args(["--day", "1", "--month", "1", "--year", "2030", "--now", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-7 years\n11 months\n29 days\n"))
        .stderr(predicate::str::contains("year is out of range (max 2024)"));
}

#[test]
fn calc_negative_field_value() {
    calc()
        .args(["--day", "-1", "--month", "1", "--year", "2024", "--now", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: December 30, 2023"))
        .stdout(predicate::str::contains("2 days"));
}

#[test]
fn calc_strict_rejects_out_of_range() {
    calc()
        .args(["--day", "1", "--month", "13", "--year", "2000", "--now", "2024-01-01"])
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: month must be between 1 and 12, got 13"));
}

#[test]
fn calc_strict_rejects_missing_field() {
    // Omitted fields stay at zero, which strict mode refuses
    calc()
        .args(["--month", "1", "--year", "2000", "--now", "2024-01-01", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("day must be between 1 and 31, got 0"));
}

#[test]
fn calc_strict_logs_unparseable_field() {
    calc()
        .args(["--day", "", "--month", "1", "--year", "2000", "--now", "2024-01-01", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("submission rejected: not a number"))
        .stderr(predicate::str::contains("Error: day is not a number"));
}

#[test]
fn calc_two_digit_year() {
    calc()
        .args(["--day", "14", "--month", "6", "--year", "95", "--now", "2024-06-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date: June 14, 1995"))
        .stdout(predicate::str::contains("29 years\n0 months\n8 days\n"));
}

#[test]
fn calc_strict_accepts_valid_fields() {
    calc()
        .args(["--day", "1", "--month", "1", "--year", "2000", "--now", "01/01/2024", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24 years"));
}

#[test]
fn calc_invalid_reference() {
    calc()
        .args(["--day", "1", "--month", "1", "--year", "2000", "--now", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date expression"));
}

#[test]
fn calc_logs_to_file() {
    let dir = tempdir().unwrap();
    let log_file = dir.path().join("age.log");

    calc()
        .args(["--day", "1", "--month", "1", "--year", "2000", "--now", "2024-01-01"])
        .arg("--log-level")
        .arg("debug")
        .arg("--log-file")
        .arg(&log_file)
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("submitted"), "Log should record the submission: {content}");
}

#[test]
fn help_lists_subcommands() {
    Command::new(assert_cmd::cargo::cargo_bin!("age-calculator"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("form"))
        .stdout(predicate::str::contains("calc"));
}

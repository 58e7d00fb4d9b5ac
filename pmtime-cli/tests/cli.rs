use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pmtime-cli").unwrap()
}

#[test]
fn prints_the_date_for_a_zero_timestamp() {
    cmd()
        .arg("0")
        .assert()
        .success()
        .stdout("1990-1-1 6:28:16.0\n");
}

#[test]
fn prints_fractional_milliseconds() {
    cmd()
        .arg("0.5")
        .assert()
        .success()
        .stdout("1990-1-1 6:28:16.500\n");
}

#[test]
fn accepts_negative_timestamps() {
    cmd()
        .arg("-1")
        .assert()
        .success()
        .stdout("1990-1-1 6:28:15.0\n");
}

#[test]
fn emits_json_when_asked() {
    cmd()
        .arg("803455309")
        .arg("--json")
        .assert()
        .success()
        .stdout(concat!(
            "{\"year\":2015,\"month\":6,\"day\":18,",
            "\"hour\":12,\"minute\":30,\"second\":5,\"millisecond\":0,",
            "\"unix_seconds\":1434630605}\n"
        ));
}

#[test]
fn fails_without_an_argument() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn rejects_a_non_numeric_argument() {
    cmd()
        .arg("half-past-nine")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn reports_out_of_range_tick_counts() {
    cmd()
        .arg("1000000000000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("supported calendar date"));
}

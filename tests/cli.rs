use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_options() {
    Command::cargo_bin("sayyes")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bg-color"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("Press 'y'"));
}

#[test]
fn invalid_background_color_is_rejected() {
    Command::cargo_bin("sayyes")
        .unwrap()
        .args(["--bg-color", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex color"));
}

#[test]
fn unknown_option_is_rejected() {
    Command::cargo_bin("sayyes")
        .unwrap()
        .arg("--sparkles")
        .assert()
        .failure();
}

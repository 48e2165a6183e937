use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn binary_prints_layout_and_exits_cleanly() {
    let base = env!("CARGO_MANIFEST_DIR");

    Command::cargo_bin("netflix_intel")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Configuration Loaded."))
        .stdout(predicate::str::contains("Base Directory"))
        .stdout(predicate::str::contains(base))
        .stdout(predicate::str::contains("netflix1.csv"));
}

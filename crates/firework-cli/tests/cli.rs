// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Binary-level checks for `fireworks`.

use assert_cmd::Command;
use predicates::prelude::*;

fn fireworks() -> Command {
    Command::cargo_bin("fireworks").expect("binary built")
}

#[test]
fn default_run_prints_and_saves_ten() {
    let work = tempfile::tempdir().expect("tempdir");
    fireworks()
        .current_dir(work.path())
        .arg("--seed")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated command:\n/summon firework_rocket "))
        .stdout(predicate::str::contains("Saved 10 commands to "))
        .stdout(predicate::str::contains("fireworks.txt"));

    let saved = std::fs::read_to_string(work.path().join("fireworks.txt")).expect("batch file");
    assert_eq!(saved.lines().count(), 10);
    assert!(saved.lines().all(|l| l.starts_with("/summon firework_rocket ")));
}

#[test]
fn same_seed_same_stdout() {
    let run = || {
        fireworks()
            .args(["--seed", "123", "one"])
            .output()
            .expect("run")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_batch_writes_empty_file() {
    let work = tempfile::tempdir().expect("tempdir");
    let out = work.path().join("empty.txt");
    fireworks()
        .args(["batch", "--count", "0", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 0 commands"));
    assert_eq!(std::fs::read_to_string(out).expect("read"), "");
}

#[test]
fn unwritable_output_fails_with_context() {
    let work = tempfile::tempdir().expect("tempdir");
    fireworks()
        .args(["batch", "--out"])
        .arg(work.path().join("missing-dir").join("x.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}

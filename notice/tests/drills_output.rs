//! End-to-end check of the `notice-drills` binary output.

use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED: &str = "\
well *****, this is awful
**** robots
**** them to ****
well *****
Allan is going straight to ****
****... that's a tough break
Report: The email going to john@does.com will cost: 0.11
====================================
Report: The email going to jane@doe.com will cost: 1.85
====================================
Report: The email going to elon@doe.com will cost: 1.05
====================================
Report: The sms going to +155555509832 will cost: 8.30
====================================
Report: The sms going to +155555504444 will cost: 1.70
====================================
Report: Invalid expense
====================================
";

#[test]
fn prints_censored_messages_then_reports() {
    Command::cargo_bin("notice-drills")
        .unwrap()
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn never_prints_a_forbidden_word() {
    Command::cargo_bin("notice-drills")
        .unwrap()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("dang")
                .or(predicate::str::contains("shoot"))
                .or(predicate::str::contains("heck"))
                .not(),
        )
        .stderr(predicate::str::is_empty());
}

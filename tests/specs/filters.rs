// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for test selection.

use crate::prelude::*;

/// > --unit runs only matching tests
#[test]
fn unit_prefix_pattern_selects_tests() {
    let project = Project::empty();

    demo_in(&project)
        .args(["-u", "arith*"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 2/5 tests"))
        .stdout(predicates::str::contains("[ START arithOrdering ]"))
        .stdout(predicates::str::contains("stringsConcat").not());

    let tests = stored_tests(&project.suite_json());
    let names: Vec<_> = tests.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["arithAddition", "arithOrdering"]);
}

/// > Patterns combine: exact, suffix and substring
#[test]
fn unit_patterns_combine() {
    let project = Project::empty();

    demo_in(&project)
        .args(["-u", "stringsConcat,*Switch", "-u", "*Unwind*"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 3/5 tests"));
}

/// > `info` after --unit still prints and exits without running
#[test]
fn unit_before_info_operand_does_not_run() {
    let project = Project::empty();

    demo_in(&project)
        .args(["-u", "arith*", "info"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Suite: verdict-demo"))
        .stdout(predicates::str::contains("Running").not());

    assert!(!project.path().join(DEFAULT_OUTDIR).exists());
}

/// > A pattern matching nothing runs nothing and passes
#[test]
fn unit_without_matches_is_vacuously_passing() {
    let project = Project::empty();

    demo_in(&project)
        .args(["-u", "nothing*"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 0/5 tests"))
        .stdout(predicates::str::contains("Done. All tests succeeded"));
}

/// > --failing reruns only tests that failed last time
#[test]
fn failing_reruns_previous_failures() {
    let project = Project::empty();

    demo_in(&project).env(FAIL_ENV, "1").assert().code(1);
    let tests = stored_tests(&project.suite_json());
    assert!(tests.contains(&("toggleSwitch".to_string(), false)));

    demo_in(&project)
        .arg("--failing")
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 1/5 tests"))
        .stdout(predicates::str::contains("[ START toggleSwitch ]"))
        .stdout(predicates::str::contains("arithAddition").not());

    let tests = stored_tests(&project.suite_json());
    assert!(tests.iter().all(|(_, passing)| *passing));
    assert!(project.output("unit/toggleSwitch/2.json").exists());
    assert!(!project.output("unit/arithAddition/2.json").exists());
}

/// > --failing after a clean run executes nothing
#[test]
fn failing_after_clean_run_runs_nothing() {
    let project = Project::empty();
    demo_in(&project).assert().success();

    demo_in(&project)
        .arg("-f")
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 0/5 tests"));
}

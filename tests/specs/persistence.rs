// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for state carried between runs.

use crate::prelude::*;

/// > The first run creates the suite file and one result per test
#[test]
fn first_run_writes_suite_and_results() {
    let project = Project::empty();
    demo_in(&project).assert().success();

    let suite = project.suite_json();
    assert_eq!(suite["suite"]["name"], "verdict-demo");
    assert_eq!(suite["suite"]["runIndex"], 1);
    assert_eq!(suite["suite"]["passing"], true);
    assert_eq!(stored_tests(&suite).len(), 5);

    for name in [
        "arithAddition",
        "arithOrdering",
        "stringsConcat",
        "panicsUnwinding",
        "toggleSwitch",
    ] {
        assert!(project.output(&format!("unit/{name}/1.json")).exists(), "{name}");
    }
}

/// > Each run increments the run index and keeps the creation date
#[test]
fn later_runs_increment_run_index() {
    let project = Project::empty();
    demo_in(&project).assert().success();
    let created = project.suite_json()["suite"]["dateCreated"].clone();

    demo_in(&project).assert().success();

    let suite = project.suite_json();
    assert_eq!(suite["suite"]["runIndex"], 2);
    assert_eq!(suite["suite"]["dateCreated"], created);
    assert!(project.output("unit/arithAddition/1.json").exists());
    assert!(project.output("unit/arithAddition/2.json").exists());
}

/// > Stored tests that no longer exist are kept and do not fail the run
#[test]
fn removed_tests_keep_their_history() {
    let project = Project::empty();
    project.file(
        "verdict-demo.dir/suite.json",
        r#"{
  "suite": {
    "kind": "default",
    "name": "verdict-demo",
    "dateCreated": "2026-01-01 00:00:00.000000 UTC",
    "dateLastRun": "2026-01-01 00:00:00.000000 UTC",
    "passing": false,
    "runIndex": 7,
    "version": { "major": 0, "minor": 1, "patch": 0 }
  },
  "unitTests": [
    {
      "name": "legacyRemoved",
      "dateCreated": "2026-01-01 00:00:00.000000 UTC",
      "dateLastRun": "2026-01-01 00:00:00.000000 UTC",
      "passing": false
    }
  ]
}
"#,
    );

    demo_in(&project)
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 5/5 tests"));

    let suite = project.suite_json();
    assert_eq!(suite["suite"]["runIndex"], 8);
    let tests = stored_tests(&suite);
    assert_eq!(tests[0], ("legacyRemoved".to_string(), false));
    assert_eq!(tests.len(), 6);
}

/// > A corrupt suite file aborts before any test runs
#[test]
fn corrupt_suite_file_is_an_error() {
    let project = Project::empty();
    project.file("verdict-demo.dir/suite.json", "{ broken");

    demo_in(&project)
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to import"))
        .stdout(predicates::str::contains("Running").not());
}

/// > --outdir moves all state
#[test]
fn outdir_flag_relocates_state() {
    let project = Project::empty();

    demo_in(&project)
        .args(["-o", "custom"])
        .assert()
        .success();

    assert!(project.path().join("custom/suite.json").exists());
    assert!(!project.output("suite.json").exists());
}

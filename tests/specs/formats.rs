// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for output formats and configuration.

use crate::prelude::*;

/// > --format toml writes TOML files
#[test]
fn toml_format_writes_toml_files() {
    let project = Project::empty();

    demo_in(&project).args(["--format", "toml"]).assert().success();
    demo_in(&project).args(["--format", "toml"]).assert().success();

    let content = std::fs::read_to_string(project.output("suite.toml")).unwrap();
    assert!(content.contains("runIndex = 2"));
    assert!(project.output("unit/stringsConcat/2.toml").exists());
    assert!(!project.output("suite.json").exists());
}

/// > Unknown formats are rejected before any test runs
#[test]
fn unknown_format_fails_at_startup() {
    let project = Project::empty();

    demo_in(&project)
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("could not find importer 'xml'"))
        .stdout(predicates::str::is_empty());

    assert!(!project.path().join(DEFAULT_OUTDIR).exists());
}

/// > Unknown suite data kinds are rejected before any test runs
#[test]
fn unknown_data_kind_fails_at_startup() {
    let project = Project::empty();

    demo_in(&project)
        .args(["--data", "performance"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "could not find suite data format 'performance'",
        ));
}

/// > verdict.toml provides defaults
#[test]
fn config_file_sets_defaults() {
    let project = Project::empty();
    project.file(
        "verdict.toml",
        "version = 1\n\n[run]\nformat = \"toml\"\nunit = [\"strings*\"]\n",
    );

    demo_in(&project)
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 1/5 tests"));

    assert!(project.output("suite.toml").exists());
}

/// > Command line flags override verdict.toml
#[test]
fn flags_override_config_file() {
    let project = Project::empty();
    project.file("verdict.toml", "[run]\nformat = \"toml\"\n");

    demo_in(&project).args(["--format", "json"]).assert().success();

    assert!(project.output("suite.json").exists());
    assert!(!project.output("suite.toml").exists());
}

/// > --no-failing overrides `failing = true` from verdict.toml
#[test]
fn negated_flag_overrides_config_file() {
    let project = Project::empty();
    project.file("verdict.toml", "[run]\nfailing = true\n");
    demo_in(&project).assert().success();

    demo_in(&project)
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 0/5 tests"));

    demo_in(&project)
        .arg("--no-failing")
        .assert()
        .success()
        .stdout(predicates::str::contains("Running 5/5 tests"));
}

/// > Environment variables act as flags
#[test]
fn environment_selects_format() {
    let project = Project::empty();

    demo_in(&project)
        .env("VERDICT_FORMAT", "toml")
        .assert()
        .success();

    assert!(project.output("suite.toml").exists());
}

/// > Unknown config keys warn but do not fail
#[test]
fn unknown_config_key_warns() {
    let project = Project::empty();
    project.file("verdict.toml", "[run]\nthreads = 4\n");

    demo_in(&project)
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown config key 'run.threads'"));
}

/// > --verbose logs to stderr, never stdout
#[test]
fn verbose_logs_go_to_stderr() {
    let project = Project::empty();

    demo_in(&project)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("resolved settings"))
        .stdout(predicates::str::contains("resolved settings").not());
}

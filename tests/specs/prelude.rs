// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Output directory of the demo suite under its working directory.
pub const DEFAULT_OUTDIR: &str = "verdict-demo.dir";

/// Makes the demo's `toggleSwitch` test fail.
pub const FAIL_ENV: &str = "VERDICT_DEMO_FAIL";

const INHERITED_ENV: &[&str] = &[
    "VERDICT_CONFIG",
    "VERDICT_DATA",
    "VERDICT_FAILING",
    "VERDICT_FORMAT",
    "VERDICT_MULTITHREADED",
    "VERDICT_OUTDIR",
    "VERDICT_UNIT",
    "VERDICT_VERBOSE",
    "VERDICT_COLOR",
    "VERDICT_LOG",
    FAIL_ENV,
];

/// Returns a Command configured to run the demo suite binary
pub fn demo_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("verdict-demo"));
    for var in INHERITED_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Demo suite running inside `project`, without colors.
pub fn demo_in(project: &Project) -> Command {
    let mut cmd = demo_cmd();
    cmd.current_dir(project.path()).arg("--no-color");
    cmd
}

/// Scratch working directory for one spec.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory marked as a git root, so config discovery stops
    /// here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Path inside the default output directory.
    pub fn output(&self, path: &str) -> PathBuf {
        self.path().join(DEFAULT_OUTDIR).join(path)
    }

    /// Parsed default `suite.json`.
    pub fn suite_json(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.output("suite.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

/// Names and verdicts of the stored tests, in stored order.
pub fn stored_tests(suite: &serde_json::Value) -> Vec<(String, bool)> {
    suite["unitTests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| {
            (
                t["name"].as_str().unwrap().to_string(),
                t["passing"].as_bool().unwrap(),
            )
        })
        .collect()
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable suite and test records.
//!
//! Records are what backends persist between runs. Runtime-only fields
//! (the runner index of a test) are never serialized, so every record
//! starts a run dormant until reconciliation selects it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timestamp format shared by every record.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f UTC";

/// Current UTC time rendered for records.
pub fn timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Harness version stored with the suite record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Version of this crate.
    pub fn current() -> Self {
        Self {
            major: parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
            minor: parse_component(env!("CARGO_PKG_VERSION_MINOR")),
            patch: parse_component(env!("CARGO_PKG_VERSION_PATCH")),
        }
    }
}

fn parse_component(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Persisted state of one named test.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    pub name: String,
    pub date_created: String,
    pub date_last_run: String,
    /// Outcome of the most recent execution.
    pub passing: bool,
    /// Runner selected for this test in the current run.
    #[serde(skip)]
    pub runner_index: Option<usize>,
}

impl TestRecord {
    /// Create the record of a test seen for the first time.
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_created: timestamp(),
            ..Self::default()
        }
    }

    /// Select this test for execution by runner `index`.
    pub fn initialize(&mut self, index: usize) {
        self.runner_index = Some(index);
        self.date_last_run = timestamp();
    }

    /// Store the outcome of the execution.
    pub fn finalize(&mut self, passing: bool) {
        self.passing = passing;
    }

    pub fn has_runner(&self) -> bool {
        self.runner_index.is_some()
    }
}

/// Persisted state of a whole suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteRecord {
    /// Suite data kind that produced this record.
    pub kind: String,
    pub name: String,
    pub date_created: String,
    pub date_last_run: String,
    /// Verdict of the most recent run.
    pub passing: bool,
    /// Incremented once per run.
    pub run_index: u64,
    pub version: Version,
}

impl Default for SuiteRecord {
    fn default() -> Self {
        Self::with_kind(Self::DEFAULT_KIND)
    }
}

impl SuiteRecord {
    /// Name of the built-in suite data kind.
    pub const DEFAULT_KIND: &'static str = "default";

    /// Empty record of the given kind, filled in by import or [`Self::create`].
    pub fn with_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: String::new(),
            date_created: String::new(),
            date_last_run: String::new(),
            passing: false,
            run_index: 0,
            version: Version::default(),
        }
    }

    /// Fill in a fresh record. Called when nothing was imported.
    pub fn create(&mut self, suite_name: impl Into<String>) {
        self.name = suite_name.into();
        self.date_created = timestamp();
        self.run_index = 0;
        self.version = Version::current();
    }

    /// Start a new run.
    pub fn initialize(&mut self) {
        self.date_last_run = timestamp();
        self.run_index += 1;
    }

    /// Store the verdict of the run.
    pub fn finalize(&mut self, passing: bool) {
        self.passing = passing;
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

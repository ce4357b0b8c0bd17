// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence backends.
//!
//! A backend reads the suite state written by a previous run and writes
//! the new state back. Writes must be deterministic: exporting the same
//! state twice produces identical bytes, so the files can be diffed and
//! kept under version control.
//!
//! Built-in formats:
//! - `json` ([`JsonFormat`])
//! - `toml` ([`TomlFormat`])

mod file;
mod json_format;
pub mod registry;
mod toml_format;

pub use file::{FileBackend, FileFormat};
pub use json_format::JsonFormat;
pub use registry::Registry;
pub use toml_format::TomlFormat;

use serde::{Deserialize, Serialize};

use crate::case::UnitTest;
use crate::check::CheckOutcome;
use crate::error::Result;
use crate::record::{SuiteRecord, TestRecord};

/// Reads persisted suite state.
pub trait Importer: Send + Sync {
    /// Populate `suite` and `tests` from persisted state.
    ///
    /// Returns `Ok(false)` when nothing was persisted yet.
    fn import_suite(&self, suite: &mut SuiteRecord, tests: &mut Vec<TestRecord>) -> Result<bool>;
}

/// Writes suite state.
///
/// `export_test_result` may be called from several worker threads at once.
pub trait Exporter: Send + Sync {
    /// Write the suite record and every test record. Called once per run.
    fn export_suite(&self, suite: &SuiteRecord, tests: &[TestRecord]) -> Result<()>;

    /// Write the results of one finished test.
    fn export_test_result(&self, suite: &SuiteRecord, test: &dyn UnitTest, name: &str)
    -> Result<()>;
}

/// Serialized form of the suite file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteDocument {
    pub suite: SuiteRecord,
    #[serde(default)]
    pub unit_tests: Vec<TestRecord>,
}

/// Serialized results of one test execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResultDocument {
    pub name: String,
    pub run_index: u64,
    pub passing: bool,
    pub facets: Vec<FacetDocument>,
}

/// Serialized counters and outcomes of one facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDocument {
    pub kind: String,
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    pub exceptions: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl TestResultDocument {
    /// Capture the state of a finished test.
    pub fn capture(suite: &SuiteRecord, test: &dyn UnitTest, name: &str) -> Self {
        let facets = test
            .facets()
            .into_iter()
            .map(|f| {
                let counts = f.counts();
                FacetDocument {
                    kind: f.kind().to_string(),
                    total: counts.total,
                    successes: counts.successes,
                    failures: counts.failures,
                    exceptions: counts.exceptions,
                    outcomes: f.outcomes().to_vec(),
                }
            })
            .collect();

        Self {
            name: name.to_string(),
            run_index: suite.run_index,
            passing: test.passing(),
            facets,
        }
    }
}

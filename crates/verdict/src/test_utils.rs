// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! In-memory backends and a handful of test cases covering every way a
//! test can end.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::backend::{Exporter, Importer, SuiteDocument, TestResultDocument};
use crate::case::{TestCase, UnitTest};
use crate::error::{Error, Result};
use crate::facet::{Compare, Panics};
use crate::record::{SuiteRecord, TestRecord};

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("verdict.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// A suite record as it looks after `create` + `initialize`.
pub fn started_suite(name: &str) -> SuiteRecord {
    let mut suite = SuiteRecord::default();
    suite.create(name);
    suite.initialize();
    suite
}

/// A stored record with the given verdict.
pub fn stored(name: &str, passing: bool) -> TestRecord {
    let mut record = TestRecord::create(name);
    record.finalize(passing);
    record
}

/// Exporter keeping everything in memory.
#[derive(Default)]
pub struct MemoryExporter {
    pub results: Mutex<Vec<TestResultDocument>>,
    pub suites: Mutex<Vec<SuiteDocument>>,
    /// Fail every test result export with this message.
    pub fail_with: Option<String>,
}

impl MemoryExporter {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Names of exported test results, sorted.
    pub fn result_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .results
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn last_suite(&self) -> Option<SuiteDocument> {
        self.suites.lock().unwrap().last().cloned()
    }
}

impl Exporter for MemoryExporter {
    fn export_suite(&self, suite: &SuiteRecord, tests: &[TestRecord]) -> Result<()> {
        self.suites.lock().unwrap().push(SuiteDocument {
            suite: suite.clone(),
            unit_tests: tests.to_vec(),
        });
        Ok(())
    }

    fn export_test_result(
        &self,
        suite: &SuiteRecord,
        test: &dyn UnitTest,
        name: &str,
    ) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(Error::export(name, message));
        }
        self.results
            .lock()
            .unwrap()
            .push(TestResultDocument::capture(suite, test, name));
        Ok(())
    }
}

/// Importer returning a fixed document, or nothing.
#[derive(Default)]
pub struct MemoryImporter {
    pub document: Option<SuiteDocument>,
}

impl MemoryImporter {
    pub fn with(suite: SuiteRecord, unit_tests: Vec<TestRecord>) -> Self {
        Self {
            document: Some(SuiteDocument { suite, unit_tests }),
        }
    }
}

impl Importer for MemoryImporter {
    fn import_suite(&self, suite: &mut SuiteRecord, tests: &mut Vec<TestRecord>) -> Result<bool> {
        match &self.document {
            Some(document) => {
                *suite = document.suite.clone();
                *tests = document.unit_tests.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Passes two checks.
#[derive(Default)]
pub struct Passing {
    pub cmp: Compare,
}

impl UnitTest for Passing {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.eq(2 + 2, 4);
        self.cmp.lt(1, 2);
        Ok(())
    }
}

impl TestCase for Passing {
    const NAME: &'static str = "sample::Passing";
}

/// Fails one check and keeps going.
#[derive(Default)]
pub struct Failing {
    pub cmp: Compare,
}

impl UnitTest for Failing {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.eq(1, 2).info("one is not two");
        self.cmp.is_true(true);
        Ok(())
    }
}

impl TestCase for Failing {
    const NAME: &'static str = "sample::Failing";
}

/// Passes one check, then stops at a fatal one.
#[derive(Default)]
pub struct Fatal {
    pub cmp: Compare,
}

impl UnitTest for Fatal {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.eq(1, 1);
        self.cmp.eq(1, 2).fatal("cannot continue")?;
        self.cmp.eq(3, 3);
        Ok(())
    }
}

impl TestCase for Fatal {
    const NAME: &'static str = "sample::Fatal";
}

/// Returns an error after passing checks.
#[derive(Default)]
pub struct Erroring {
    pub cmp: Compare,
}

impl UnitTest for Erroring {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.is_true(true);
        anyhow::bail!("disk on fire")
    }
}

impl TestCase for Erroring {
    const NAME: &'static str = "sample::Erroring";
}

/// Panics inside the body.
#[derive(Default)]
pub struct Panicking {
    pub panics: Panics,
}

impl UnitTest for Panicking {
    crate::facets!(panics);

    fn run(&mut self) -> anyhow::Result<()> {
        panic!("unexpected state")
    }
}

impl TestCase for Panicking {
    const NAME: &'static str = "sample::Panicking";
}

/// Panics while being constructed.
pub struct BrokenSetup {
    pub cmp: Compare,
}

impl Default for BrokenSetup {
    fn default() -> Self {
        panic!("setup failed")
    }
}

impl UnitTest for BrokenSetup {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl TestCase for BrokenSetup {
    const NAME: &'static str = "sample::BrokenSetup";
}

/// Passing test that must not share the process with others.
#[derive(Default)]
pub struct Exclusive {
    pub cmp: Compare,
}

impl UnitTest for Exclusive {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.ne("a", "b");
        Ok(())
    }
}

impl TestCase for Exclusive {
    const NAME: &'static str = "sample::Exclusive";
    const PARALLEL: bool = false;
}

/// A second type whose display name collides with [`Passing`].
#[derive(Default)]
pub struct PassingTwin {
    pub cmp: Compare,
}

impl UnitTest for PassingTwin {
    crate::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl TestCase for PassingTwin {
    const NAME: &'static str = "sample:Passing";
}

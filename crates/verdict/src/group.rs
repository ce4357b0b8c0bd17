// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test group orchestration.
//!
//! The group owns the persisted test records and the runners compiled into
//! the binary. A run has three phases:
//!
//! 1. Reconcile: match runners to records by name, honoring the filter and
//!    failing-only mode, and give each selected record its runner index.
//! 2. Execute: parallel-safe tests on the rayon pool (multithreaded mode
//!    only), then the rest serially in record order.
//! 3. Aggregate: store each verdict on its record.
//!
//! Records whose runner disappeared keep their history but never run and
//! never count towards the verdict.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rayon::prelude::*;
use termcolor::WriteColor;

use crate::backend::Exporter;
use crate::case::TestCase;
use crate::error::{Error, Result};
use crate::filter::NameFilter;
use crate::record::{SuiteRecord, TestRecord};
use crate::report;
use crate::runner::{RunContext, TestRunner, UnitTestRunner};

/// Counts over the records selected in the current run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub selected: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Records and runners of one suite.
#[derive(Default)]
pub struct TestGroup {
    records: Vec<TestRecord>,
    runners: Vec<Box<dyn TestRunner>>,
    filter: NameFilter,
    failing_only: bool,
    multithreaded: bool,
}

impl TestGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runner. Display names must be unique.
    pub fn add_runner(&mut self, runner: Box<dyn TestRunner>) -> Result<()> {
        if self.runners.iter().any(|r| r.name() == runner.name()) {
            return Err(Error::DuplicateTest {
                name: runner.name().to_string(),
            });
        }
        tracing::debug!("registered test {}", runner.name());
        self.runners.push(runner);
        Ok(())
    }

    /// Register a test type.
    pub fn add_test<T: TestCase>(&mut self) -> Result<()> {
        self.add_runner(Box::new(UnitTestRunner::<T>::new()))
    }

    pub fn set_filter(&mut self, filter: NameFilter) {
        self.filter = filter;
    }

    /// Only run tests that failed last time, plus new ones.
    pub fn set_failing_only(&mut self, failing_only: bool) {
        self.failing_only = failing_only;
    }

    pub fn set_multithreaded(&mut self, multithreaded: bool) {
        self.multithreaded = multithreaded;
    }

    /// Display names of the registered tests, in registration order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.runners.iter().map(|r| r.name())
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Persisted records, replaced wholesale by the importer.
    pub fn records_mut(&mut self) -> &mut Vec<TestRecord> {
        &mut self.records
    }

    /// Select the tests to run. Returns how many were selected.
    pub fn reconcile(&mut self) -> usize {
        for record in &mut self.records {
            record.runner_index = None;
        }

        let mut selected = 0;
        for (index, runner) in self.runners.iter().enumerate() {
            let name = runner.name();
            if !self.filter.matches(name, true) {
                tracing::debug!("{name}: filtered out");
                continue;
            }

            match self.records.iter_mut().find(|r| r.name == name) {
                Some(record) => {
                    if self.failing_only && record.passing {
                        tracing::debug!("{name}: passed last run, skipping");
                        continue;
                    }
                    record.initialize(index);
                }
                None => {
                    tracing::debug!("{name}: new test");
                    let mut record = TestRecord::create(name);
                    record.initialize(index);
                    self.records.push(record);
                }
            }
            selected += 1;
        }

        let stale = self
            .records
            .iter()
            .filter(|r| !self.runners.iter().any(|runner| runner.name() == r.name))
            .count();
        if stale > 0 {
            tracing::info!("{stale} stored tests no longer exist");
        }

        selected
    }

    /// Reconcile, execute the selected tests and store their verdicts.
    ///
    /// Test output goes to `out`; per-test results go to the exporter as
    /// soon as each test finishes. Exporter and console errors abort the
    /// run.
    pub fn run<W>(
        &mut self,
        suite: &SuiteRecord,
        exporter: &dyn Exporter,
        out: &Mutex<W>,
    ) -> Result<()>
    where
        W: WriteColor + Send,
    {
        let selected = self.reconcile();
        report::running(&mut *lock(out), selected, self.runners.len())?;

        let ctx = RunContext { suite, exporter };
        let (parallel, serial): (Vec<_>, Vec<_>) = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(pos, record)| record.runner_index.map(|index| (pos, index)))
            .partition(|&(_, index)| self.multithreaded && self.runners[index].is_parallel());

        tracing::debug!(
            parallel = parallel.len(),
            serial = serial.len(),
            "dispatching tests"
        );

        let runners = &self.runners;
        let finished: Vec<(usize, Result<bool>)> = parallel
            .par_iter()
            .map(|&(pos, index)| (pos, run_one(runners[index].as_ref(), ctx, out)))
            .collect();

        let mut first_error = None;
        for (pos, result) in finished {
            match result {
                Ok(passing) => self.records[pos].finalize(passing),
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        for (pos, index) in serial {
            let passing = run_one(self.runners[index].as_ref(), ctx, out)?;
            self.records[pos].finalize(passing);
        }

        Ok(())
    }

    /// All selected tests passed. Dormant records are ignored.
    pub fn is_passing(&self) -> bool {
        self.records
            .iter()
            .filter(|r| r.has_runner())
            .all(|r| r.passing)
    }

    pub fn summary(&self) -> Summary {
        self.records
            .iter()
            .filter(|r| r.has_runner())
            .fold(Summary::default(), |mut summary, r| {
                summary.selected += 1;
                if r.passing {
                    summary.passed += 1;
                } else {
                    summary.failed += 1;
                }
                summary
            })
    }
}

/// Run one test and print its block.
fn run_one<W: WriteColor + Send>(
    runner: &dyn TestRunner,
    ctx: RunContext<'_>,
    out: &Mutex<W>,
) -> Result<bool> {
    let outcome = runner.run(ctx)?;
    tracing::debug!(
        test = runner.name(),
        elapsed_ms = outcome.duration.as_millis() as u64,
        "test completed"
    );
    report::test_block(&mut *lock(out), runner.name(), &outcome)?;
    Ok(outcome.passing)
}

/// A panic while printing must not lose the output of other tests.
pub(crate) fn lock<W>(out: &Mutex<W>) -> MutexGuard<'_, W> {
    out.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;

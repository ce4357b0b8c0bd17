// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite controller.
//!
//! Drives one run from persisted state to persisted state:
//! import, initialize, run the group, finalize, export. Steps are never
//! skipped or reordered; a backend error aborts the run.

use std::sync::Mutex;

use termcolor::WriteColor;

use crate::backend::{Exporter, Importer};
use crate::error::Result;
use crate::group::{TestGroup, lock};
use crate::record::SuiteRecord;
use crate::report;

/// A named suite with its test group.
pub struct TestSuite {
    name: String,
    record: SuiteRecord,
    group: TestGroup,
}

impl TestSuite {
    /// `record` is the empty record of the selected suite data kind, used
    /// when nothing was persisted yet.
    pub fn new(name: impl Into<String>, record: SuiteRecord, group: TestGroup) -> Self {
        Self {
            name: name.into(),
            record,
            group,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record(&self) -> &SuiteRecord {
        &self.record
    }

    pub fn group(&self) -> &TestGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut TestGroup {
        &mut self.group
    }

    /// Run the suite. Returns the verdict stored in the suite record.
    pub fn run<W>(
        &mut self,
        importer: &dyn Importer,
        exporter: &dyn Exporter,
        out: &Mutex<W>,
    ) -> Result<bool>
    where
        W: WriteColor + Send,
    {
        let kind = self.record.kind.clone();
        if importer.import_suite(&mut self.record, self.group.records_mut())? {
            tracing::info!(
                "resuming suite '{}' after run {}",
                self.record.name,
                self.record.run_index
            );
            if self.record.kind != kind {
                tracing::warn!(
                    "stored suite data is '{}', requested '{kind}'",
                    self.record.kind
                );
            }
        } else {
            tracing::info!("creating suite '{}'", self.name);
            self.record.create(self.name.as_str());
        }

        self.record.initialize();
        self.group.run(&self.record, exporter, out)?;
        self.record.finalize(self.group.is_passing());
        exporter.export_suite(&self.record, self.group.records())?;

        report::done(
            &mut *lock(out),
            &self.group.summary(),
            self.record.passing,
        )?;
        Ok(self.record.passing)
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-based backend shared by the text formats.
//!
//! Layout under the output directory:
//! - `suite.<ext>`: suite record and all test records
//! - `unit/<test>/<run index>.<ext>`: results of one test execution

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Exporter, Importer, SuiteDocument, TestResultDocument};
use crate::case::UnitTest;
use crate::error::{Error, Result};
use crate::record::{SuiteRecord, TestRecord};

/// A text encoding for [`FileBackend`].
pub trait FileFormat: Send + Sync + 'static {
    /// Registry name.
    const NAME: &'static str;

    /// File extension, without the dot.
    const EXTENSION: &'static str;

    fn encode<T: Serialize>(value: &T) -> anyhow::Result<String>;

    fn decode<T: DeserializeOwned>(text: &str) -> anyhow::Result<T>;
}

/// Importer and exporter writing one file per document.
pub struct FileBackend<F> {
    root: PathBuf,
    _format: PhantomData<fn() -> F>,
}

impl<F: FileFormat> FileBackend<F> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            _format: PhantomData,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn suite_path(&self) -> PathBuf {
        self.root.join(format!("suite.{}", F::EXTENSION))
    }

    pub fn test_result_path(&self, name: &str, run_index: u64) -> PathBuf {
        self.root
            .join("unit")
            .join(name)
            .join(format!("{run_index}.{}", F::EXTENSION))
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let mut content = F::encode(value).map_err(|e| Error::export(path, e))?;
        if !content.ends_with('\n') {
            content.push('\n');
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::export(path, e))?;
        }
        std::fs::write(path, content).map_err(|e| Error::export(path, e))?;
        tracing::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl<F: FileFormat> Importer for FileBackend<F> {
    fn import_suite(&self, suite: &mut SuiteRecord, tests: &mut Vec<TestRecord>) -> Result<bool> {
        let path = self.suite_path();
        if !path.exists() {
            tracing::debug!("no suite file at {}", path.display());
            return Ok(false);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| Error::import(&path, e))?;
        let document: SuiteDocument =
            F::decode(&content).map_err(|e| Error::import(&path, format!("{e:#}")))?;

        tracing::debug!(
            "imported suite '{}' (run {}) with {} tests",
            document.suite.name,
            document.suite.run_index,
            document.unit_tests.len()
        );

        *suite = document.suite;
        *tests = document.unit_tests;
        Ok(true)
    }
}

impl<F: FileFormat> Exporter for FileBackend<F> {
    fn export_suite(&self, suite: &SuiteRecord, tests: &[TestRecord]) -> Result<()> {
        let document = SuiteDocument {
            suite: suite.clone(),
            unit_tests: tests.to_vec(),
        };
        self.write(&self.suite_path(), &document)
    }

    fn export_test_result(
        &self,
        suite: &SuiteRecord,
        test: &dyn UnitTest,
        name: &str,
    ) -> Result<()> {
        let document = TestResultDocument::capture(suite, test, name);
        self.write(&self.test_result_path(name, suite.run_index), &document)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

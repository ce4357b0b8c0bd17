// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named output formats and suite data kinds.
//!
//! The registry is built once at startup and handed to the harness.
//! Registering a name twice is a configuration error.

use std::collections::BTreeMap;
use std::path::Path;

use super::{Exporter, FileBackend, FileFormat, Importer, JsonFormat, TomlFormat};
use crate::error::{Error, Result};
use crate::record::SuiteRecord;

type ImporterFactory = Box<dyn Fn(&Path) -> Box<dyn Importer> + Send + Sync>;
type ExporterFactory = Box<dyn Fn(&Path) -> Box<dyn Exporter> + Send + Sync>;
type SuiteDataFactory = Box<dyn Fn() -> SuiteRecord + Send + Sync>;

/// Constructors for importers, exporters and suite records, by name.
#[derive(Default)]
pub struct Registry {
    importers: BTreeMap<String, ImporterFactory>,
    exporters: BTreeMap<String, ExporterFactory>,
    suite_data: BTreeMap<String, SuiteDataFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the `json` and `toml` formats and the `default`
    /// suite data kind.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert_file_format::<JsonFormat>();
        registry.insert_file_format::<TomlFormat>();
        registry.suite_data.insert(
            SuiteRecord::DEFAULT_KIND.to_string(),
            Box::new(SuiteRecord::default),
        );
        registry
    }

    fn insert_file_format<F: FileFormat>(&mut self) {
        self.importers.insert(
            F::NAME.to_string(),
            Box::new(|p: &Path| Box::new(FileBackend::<F>::new(p)) as Box<dyn Importer>),
        );
        self.exporters.insert(
            F::NAME.to_string(),
            Box::new(|p: &Path| Box::new(FileBackend::<F>::new(p)) as Box<dyn Exporter>),
        );
    }

    pub fn register_importer<I, C>(&mut self, name: &str, constructor: C) -> Result<()>
    where
        I: Importer + 'static,
        C: Fn(&Path) -> I + Send + Sync + 'static,
    {
        let factory: ImporterFactory =
            Box::new(move |p: &Path| -> Box<dyn Importer> { Box::new(constructor(p)) });
        insert_unique(&mut self.importers, "importer", name, factory)
    }

    pub fn register_exporter<E, C>(&mut self, name: &str, constructor: C) -> Result<()>
    where
        E: Exporter + 'static,
        C: Fn(&Path) -> E + Send + Sync + 'static,
    {
        let factory: ExporterFactory =
            Box::new(move |p: &Path| -> Box<dyn Exporter> { Box::new(constructor(p)) });
        insert_unique(&mut self.exporters, "exporter", name, factory)
    }

    /// Register both halves of a [`FileFormat`] under its name.
    pub fn register_file_format<F: FileFormat>(&mut self) -> Result<()> {
        self.register_importer(F::NAME, |p: &Path| FileBackend::<F>::new(p))?;
        self.register_exporter(F::NAME, |p: &Path| FileBackend::<F>::new(p))
    }

    /// Register a suite data kind. The constructor returns an empty record
    /// of that kind.
    pub fn register_suite_data<C>(&mut self, name: &str, constructor: C) -> Result<()>
    where
        C: Fn() -> SuiteRecord + Send + Sync + 'static,
    {
        let factory: SuiteDataFactory = Box::new(constructor);
        insert_unique(&mut self.suite_data, "suite data", name, factory)
    }

    pub fn importer(&self, name: &str, dir: &Path) -> Result<Box<dyn Importer>> {
        let factory = self.importers.get(name).ok_or_else(|| Error::UnknownFormat {
            kind: "importer",
            name: name.to_string(),
        })?;
        Ok(factory(dir))
    }

    pub fn exporter(&self, name: &str, dir: &Path) -> Result<Box<dyn Exporter>> {
        let factory = self.exporters.get(name).ok_or_else(|| Error::UnknownFormat {
            kind: "exporter",
            name: name.to_string(),
        })?;
        Ok(factory(dir))
    }

    pub fn suite_data(&self, name: &str) -> Result<SuiteRecord> {
        let factory = self
            .suite_data
            .get(name)
            .ok_or_else(|| Error::UnknownDataKind {
                name: name.to_string(),
            })?;
        Ok(factory())
    }

    /// Names of formats with an exporter, sorted.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.exporters.keys().map(String::as_str)
    }
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    kind: &'static str,
    name: &str,
    value: T,
) -> Result<()> {
    if map.contains_key(name) {
        return Err(Error::DuplicateRegistration {
            kind,
            name: name.to_string(),
        });
    }
    map.insert(name.to_string(), value);
    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entry point for test binaries.
//!
//! ```ignore
//! fn main() -> anyhow::Result<std::process::ExitCode> {
//!     let mut harness = verdict::Harness::new("demo");
//!     harness.add::<Addition>()?;
//!     harness.run_from_args()
//! }
//! ```

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

use crate::backend::Registry;
use crate::case::TestCase;
use crate::cli::{Cli, Operand};
use crate::config::{self, RunConfig};
use crate::discovery::find_config;
use crate::filter::NameFilter;
use crate::group::TestGroup;
use crate::record::SuiteRecord;
use crate::report;
use crate::suite::TestSuite;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "VERDICT_LOG";

const DEFAULT_FORMAT: &str = "json";

/// A suite under construction: its name, tests and output formats.
pub struct Harness {
    name: String,
    registry: Registry,
    group: TestGroup,
}

/// Options after merging the command line over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: String,
    pub data: String,
    pub failing: bool,
    pub multithreaded: bool,
    pub outdir: PathBuf,
    pub unit: Vec<String>,
}

impl Settings {
    /// Command line values win; config values fill the gaps.
    pub fn resolve(cli: &Cli, config: &RunConfig, suite: &str, cwd: &Path) -> Self {
        let unit = if cli.unit.is_empty() {
            config.unit.clone()
        } else {
            cli.unit.clone()
        };

        Self {
            format: cli
                .format
                .clone()
                .or_else(|| config.format.clone())
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            data: cli
                .data
                .clone()
                .or_else(|| config.data.clone())
                .unwrap_or_else(|| SuiteRecord::DEFAULT_KIND.to_string()),
            failing: cli
                .failing_override()
                .or(config.failing)
                .unwrap_or(false),
            multithreaded: cli
                .multithreaded_override()
                .or(config.multithreaded)
                .unwrap_or(false),
            outdir: cli
                .outdir
                .clone()
                .or_else(|| config.outdir.clone())
                .unwrap_or_else(|| cwd.join(format!("{suite}.dir"))),
            unit,
        }
    }
}

impl Harness {
    /// A harness with the built-in formats and no tests.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: Registry::with_builtins(),
            group: TestGroup::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a test type. Fails if its display name is taken.
    pub fn add<T: TestCase>(&mut self) -> crate::Result<&mut Self> {
        self.group.add_test::<T>()?;
        Ok(self)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register custom formats or suite data kinds.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Parse the process arguments and run.
    pub fn run_from_args(self) -> anyhow::Result<ExitCode> {
        self.run_with(Cli::parse())
    }

    /// Run with already parsed arguments, printing to stdout.
    pub fn run_with(self, cli: Cli) -> anyhow::Result<ExitCode> {
        init_logging(cli.verbose);
        let choice = cli.color.resolve(cli.no_color);
        let out = Mutex::new(StandardStream::stdout(choice));
        self.run_to(cli, &out)
    }

    /// Run with parsed arguments against any output stream.
    pub fn run_to<W>(mut self, cli: Cli, out: &Mutex<W>) -> anyhow::Result<ExitCode>
    where
        W: termcolor::WriteColor + Send,
    {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let run_config = match cli.config.clone().or_else(|| find_config(&cwd)) {
            Some(path) => config::load(&path)?.run,
            None => RunConfig::default(),
        };
        let settings = Settings::resolve(&cli, &run_config, &self.name, &cwd);
        tracing::debug!(?settings, "resolved settings");

        if cli.operand == Some(Operand::Info) {
            let mut out = crate::group::lock(out);
            report::info(&mut *out, &self.name, &settings.outdir)?;
            let formats: Vec<_> = self.registry.formats().collect();
            writeln!(out, "Formats: {}", formats.join(", "))?;
            writeln!(out, "Tests: {}", self.group.test_names().count())?;
            return Ok(ExitCode::SUCCESS);
        }

        // Resolve everything that can fail before any test runs
        let importer = self.registry.importer(&settings.format, &settings.outdir)?;
        let exporter = self.registry.exporter(&settings.format, &settings.outdir)?;
        let record = self.registry.suite_data(&settings.data)?;

        self.group.set_filter(NameFilter::new(&settings.unit));
        self.group.set_failing_only(settings.failing);
        self.group.set_multithreaded(settings.multithreaded);

        let mut suite = TestSuite::new(self.name, record, self.group);
        let passing = suite.run(importer.as_ref(), exporter.as_ref(), out)?;

        Ok(if passing {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;

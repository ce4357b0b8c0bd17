// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A unit test harness that remembers.
//!
//! Test binaries register their test types with a [`Harness`] and call
//! [`Harness::run_from_args`] from `main`. Every run reads the state left
//! by the previous one from the output directory, decides which tests to
//! run, executes them serially or in parallel, and writes the new state
//! back:
//!
//! - `--failing` reruns only tests that failed last time
//! - `--unit` filters tests by name
//! - `--multithreaded` runs parallel-safe tests concurrently
//! - `--format` picks the persistence format (`json`, `toml`, or custom)
//!
//! A test is a type holding check facets:
//!
//! ```ignore
//! #[derive(Default)]
//! struct Addition {
//!     cmp: verdict::Compare,
//! }
//!
//! impl verdict::UnitTest for Addition {
//!     verdict::facets!(cmp);
//!
//!     fn run(&mut self) -> anyhow::Result<()> {
//!         self.cmp.eq(2 + 2, 4);
//!         self.cmp.lt(1, 2).fatal("ordering is broken")?;
//!         Ok(())
//!     }
//! }
//!
//! impl verdict::TestCase for Addition {
//!     const NAME: &'static str = "math::Addition";
//! }
//! ```

pub mod backend;
mod case;
mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
mod error;
mod facet;
pub mod filter;
pub mod group;
mod harness;
pub mod record;
pub mod report;
pub mod runner;
pub mod suite;
mod unwind;

#[cfg(test)]
mod test_utils;

pub use backend::{Exporter, Importer, Registry};
pub use case::{TestCase, UnitTest, display_name};
pub use check::{CheckFatal, CheckOutcome, CheckResult, CheckStatus, SourceLocation, Transcript};
pub use error::{Error, Result};
pub use facet::{Compare, Counts, Facet, FacetState, Panics};
pub use filter::NameFilter;
pub use harness::{Harness, LOG_ENV, Settings};

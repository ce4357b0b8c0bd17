// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runners with error isolation.
//!
//! A runner owns no state besides the identity of its test type. Each
//! invocation builds a fresh instance, runs it, and converts whatever
//! went wrong into a failing [`RunOutcome`] so one test can never abort
//! the rest of the group.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use crate::backend::Exporter;
use crate::case::{TestCase, UnitTest, display_name};
use crate::check::{CheckFatal, Transcript};
use crate::error::Result;
use crate::record::SuiteRecord;
use crate::unwind::{self, panic_message};

/// Shared, read-only inputs of a test execution.
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    pub suite: &'a SuiteRecord,
    pub exporter: &'a dyn Exporter,
}

/// Result of one test execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub passing: bool,
    /// Why the test stopped early, if it did.
    pub error: Option<String>,
    /// Everything the test wrote while running.
    pub transcript: String,
    pub duration: Duration,
}

/// Executes one kind of test.
pub trait TestRunner: Send + Sync {
    /// Display name of the test.
    fn name(&self) -> &str;

    /// Whether the test may run concurrently with others.
    fn is_parallel(&self) -> bool;

    /// Create and run the test, then hand its results to the exporter.
    ///
    /// Only exporter failures are returned as errors.
    fn run(&self, ctx: RunContext<'_>) -> Result<RunOutcome>;
}

/// Runner for a [`TestCase`] type.
pub struct UnitTestRunner<T> {
    name: String,
    _test: PhantomData<fn() -> T>,
}

impl<T: TestCase> UnitTestRunner<T> {
    pub fn new() -> Self {
        Self {
            name: display_name(T::NAME),
            _test: PhantomData,
        }
    }
}

impl<T: TestCase> Default for UnitTestRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TestCase> TestRunner for UnitTestRunner<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_parallel(&self) -> bool {
        T::PARALLEL
    }

    fn run(&self, ctx: RunContext<'_>) -> Result<RunOutcome> {
        let start = Instant::now();
        let transcript = Transcript::new();

        // Constructing the test may panic as well
        let built = unwind::catch(T::default);
        let (test, error) = match built {
            Ok(mut test) => {
                for facet in test.facets_mut() {
                    facet.bind(transcript.clone());
                }
                let error = execute(&mut test);
                (Some(test), error)
            }
            Err(payload) => (None, Some(format!("Panic: {}", panic_message(&*payload)))),
        };

        let passing = error.is_none() && test.as_ref().is_some_and(|t| t.passing());

        if let Some(test) = &test {
            ctx.exporter.export_test_result(ctx.suite, test, &self.name)?;
        }

        tracing::debug!(test = %self.name, passing, "test finished");

        Ok(RunOutcome {
            passing,
            error,
            transcript: transcript.take(),
            duration: start.elapsed(),
        })
    }
}

/// Run the body, returning a message if it stopped abnormally.
fn execute(test: &mut dyn UnitTest) -> Option<String> {
    match unwind::catch(|| test.run()) {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(match err.downcast_ref::<CheckFatal>() {
            Some(fatal) => format!("Test terminated because of failed check: {fatal}"),
            None => format!("Error: {err:#}"),
        }),
        Err(payload) => Some(format!("Panic: {}", panic_message(&*payload))),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

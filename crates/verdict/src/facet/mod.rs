// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check facets.
//!
//! A facet is an independent set of checks a test can use. A test holds
//! any number of facets as fields and lists them through
//! [`UnitTest::facets`](crate::UnitTest::facets); it passes only when every
//! facet passes.

mod compare;
mod panics;

pub use compare::Compare;
pub use panics::Panics;

use std::panic::Location;

use crate::check::{CheckOutcome, CheckResult, CheckStatus, SourceLocation, Transcript};

/// Aggregate counters of one facet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    pub exceptions: usize,
}

/// Capability shared by all facets.
pub trait Facet {
    /// Unique facet kind, used as a key in exported results.
    fn kind(&self) -> &'static str;

    /// Recorded state.
    fn state(&self) -> &FacetState;

    /// Mutable recorded state.
    fn state_mut(&mut self) -> &mut FacetState;

    /// Direct check output to `out`.
    fn bind(&mut self, out: Transcript) {
        self.state_mut().bind(out);
    }

    fn counts(&self) -> Counts {
        self.state().counts()
    }

    fn outcomes(&self) -> &[CheckOutcome] {
        self.state().outcomes()
    }

    fn is_passing(&self) -> bool {
        self.state().is_passing()
    }
}

/// Recorder backing every facet.
#[derive(Debug, Default)]
pub struct FacetState {
    counts: Counts,
    outcomes: Vec<CheckOutcome>,
    out: Option<Transcript>,
}

impl FacetState {
    pub fn bind(&mut self, out: Transcript) {
        self.out = Some(out);
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn is_passing(&self) -> bool {
        self.counts.successes == self.counts.total
    }

    /// Record the outcome of one check and echo failures to the transcript.
    pub fn record(
        &mut self,
        status: CheckStatus,
        location: &Location<'_>,
        message: impl Into<String>,
    ) -> CheckResult {
        let outcome = CheckOutcome {
            status,
            location: SourceLocation::from(location),
            message: message.into(),
        };

        if !status.is_success()
            && let Some(out) = &self.out
        {
            out.line(format_args!("{}:\n    {}", outcome.location, outcome.message));
        }

        self.counts.total += 1;
        match status {
            CheckStatus::Success => self.counts.successes += 1,
            CheckStatus::Failure => self.counts.failures += 1,
            CheckStatus::Exception => self.counts.exceptions += 1,
        }
        self.outcomes.push(outcome);

        CheckResult::new(status, self.out.clone())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

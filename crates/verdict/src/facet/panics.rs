// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checks on panicking and fallible code.

use std::panic::Location;

use super::{Facet, FacetState};
use crate::check::{CheckResult, CheckStatus};
use crate::unwind::{self, panic_message};

/// Facet asserting whether code panics or returns an error.
#[derive(Debug, Default)]
pub struct Panics {
    state: FacetState,
}

impl Facet for Panics {
    fn kind(&self) -> &'static str {
        "panics"
    }

    fn state(&self) -> &FacetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FacetState {
        &mut self.state
    }
}

impl Panics {
    /// Succeeds if `f` panics.
    #[track_caller]
    pub fn expect_panic(&mut self, f: impl FnOnce()) -> CheckResult {
        let loc = Location::caller();
        match unwind::catch(f) {
            Err(_) => self.state.record(CheckStatus::Success, loc, ""),
            Ok(()) => self.state.record(CheckStatus::Failure, loc, "Expected a panic"),
        }
    }

    /// Succeeds if `f` returns without panicking.
    #[track_caller]
    pub fn expect_no_panic(&mut self, f: impl FnOnce()) -> CheckResult {
        let loc = Location::caller();
        match unwind::catch(f) {
            Ok(()) => self.state.record(CheckStatus::Success, loc, ""),
            Err(payload) => self.state.record(
                CheckStatus::Failure,
                loc,
                format!("An unexpected panic occurred: {}", panic_message(&*payload)),
            ),
        }
    }

    /// Succeeds if `result` is an `Err`.
    #[track_caller]
    pub fn expect_err<T, E>(&mut self, result: Result<T, E>) -> CheckResult {
        let loc = Location::caller();
        match result {
            Err(_) => self.state.record(CheckStatus::Success, loc, ""),
            Ok(_) => self.state.record(CheckStatus::Failure, loc, "Expected an error"),
        }
    }

    /// Succeeds if `result` is `Ok`.
    #[track_caller]
    pub fn expect_ok<T, E: std::fmt::Display>(&mut self, result: Result<T, E>) -> CheckResult {
        let loc = Location::caller();
        match result {
            Ok(_) => self.state.record(CheckStatus::Success, loc, ""),
            Err(e) => self.state.record(
                CheckStatus::Failure,
                loc,
                format!("An unexpected error was returned: {e}"),
            ),
        }
    }
}

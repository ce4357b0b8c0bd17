// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value comparisons.

use std::fmt::Debug;
use std::panic::Location;

use super::{Facet, FacetState};
use crate::check::{CheckResult, CheckStatus};
use crate::unwind::{self, panic_message};

/// Facet comparing values.
///
/// Failures describe the expected relation, e.g. `1 == 2`.
#[derive(Debug, Default)]
pub struct Compare {
    state: FacetState,
}

impl Facet for Compare {
    fn kind(&self) -> &'static str {
        "compare"
    }

    fn state(&self) -> &FacetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FacetState {
        &mut self.state
    }
}

impl Compare {
    #[track_caller]
    pub fn is_true(&mut self, value: bool) -> CheckResult {
        self.relation(|| value, || format!("{value} == true"))
    }

    #[track_caller]
    pub fn is_false(&mut self, value: bool) -> CheckResult {
        self.relation(|| !value, || format!("{value} == false"))
    }

    #[track_caller]
    pub fn eq<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs == rhs, || format!("{lhs:?} == {rhs:?}"))
    }

    #[track_caller]
    pub fn ne<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs != rhs, || format!("{lhs:?} != {rhs:?}"))
    }

    #[track_caller]
    pub fn lt<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs < rhs, || format!("{lhs:?} < {rhs:?}"))
    }

    #[track_caller]
    pub fn le<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs <= rhs, || format!("{lhs:?} <= {rhs:?}"))
    }

    #[track_caller]
    pub fn gt<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs > rhs, || format!("{lhs:?} > {rhs:?}"))
    }

    #[track_caller]
    pub fn ge<A, B>(&mut self, lhs: A, rhs: B) -> CheckResult
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        self.relation(|| lhs >= rhs, || format!("{lhs:?} >= {rhs:?}"))
    }

    /// `low <= value <= high`
    #[track_caller]
    pub fn between<T>(&mut self, low: T, high: T, value: T) -> CheckResult
    where
        T: PartialOrd + Debug,
    {
        self.relation(|| low <= value && value <= high, || {
            format!("{low:?} <= {value:?} <= {high:?}")
        })
    }

    /// Element-wise equality of two sequences of equal length.
    #[track_caller]
    pub fn seq_eq<A, B, I, J>(&mut self, lhs: I, rhs: J) -> CheckResult
    where
        I: IntoIterator<Item = A>,
        J: IntoIterator<Item = B>,
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        let loc = Location::caller();
        let mut lhs = lhs.into_iter();
        let mut rhs = rhs.into_iter();
        let mut index = 0usize;
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return self.state.record(CheckStatus::Success, loc, ""),
                (Some(a), Some(b)) => match unwind::catch(|| a == b) {
                    Ok(true) => {}
                    Ok(false) => {
                        return self.state.record(
                            CheckStatus::Failure,
                            loc,
                            format!("{a:?} == {b:?} at index {index}"),
                        );
                    }
                    Err(payload) => {
                        let message = panic_message(&*payload);
                        return self.state.record(
                            CheckStatus::Exception,
                            loc,
                            format!("{a:?} == {b:?} at index {index}: {message}"),
                        );
                    }
                },
                (left, _) => {
                    let (l, r) = if left.is_some() {
                        (index + 1 + lhs.count(), index)
                    } else {
                        (index, index + 1 + rhs.count())
                    };
                    return self.state.record(
                        CheckStatus::Failure,
                        loc,
                        format!("length lhs[{l}] != length rhs[{r}]"),
                    );
                }
            }
            index += 1;
        }
    }

    /// Evaluate a fallible condition. An `Err` or a panic is recorded as an
    /// exception.
    #[track_caller]
    pub fn holds<E>(&mut self, description: &str, f: impl FnOnce() -> Result<bool, E>) -> CheckResult
    where
        E: std::fmt::Display,
    {
        let loc = Location::caller();
        match unwind::catch(f) {
            Ok(Ok(true)) => self.state.record(CheckStatus::Success, loc, ""),
            Ok(Ok(false)) => self.state.record(CheckStatus::Failure, loc, description),
            Ok(Err(e)) => self
                .state
                .record(CheckStatus::Exception, loc, format!("{description}: {e}")),
            Err(payload) => self.state.record(
                CheckStatus::Exception,
                loc,
                format!("{description}: {}", panic_message(&*payload)),
            ),
        }
    }

    /// Record whether `holds` returns true. A panicking comparison is an
    /// exception, not a failure.
    #[track_caller]
    fn relation(
        &mut self,
        holds: impl FnOnce() -> bool,
        describe: impl FnOnce() -> String,
    ) -> CheckResult {
        let loc = Location::caller();
        match unwind::catch(holds) {
            Ok(true) => self.state.record(CheckStatus::Success, loc, ""),
            Ok(false) => self.state.record(CheckStatus::Failure, loc, describe()),
            Err(payload) => self.state.record(
                CheckStatus::Exception,
                loc,
                format!("{}: {}", describe(), panic_message(&*payload)),
            ),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Individual check outcomes and the transcript they are reported to.
//!
//! Every check performed by a facet produces a [`CheckOutcome`]. Failing
//! checks are also written to the test's [`Transcript`] as they happen, and
//! the returned [`CheckResult`] lets the caller annotate the failure or
//! escalate it into a [`CheckFatal`] that terminates the test.

use std::cell::RefCell;
use std::fmt;
use std::panic::Location;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

const NO_MESSAGE: &str = "<no message>";

/// Status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The checked condition held.
    Success,
    /// The checked condition did not hold.
    Failure,
    /// Evaluating the condition itself failed.
    Exception,
}

impl CheckStatus {
    pub fn is_success(self) -> bool {
        self == CheckStatus::Success
    }
}

/// Source position of a check, captured with `#[track_caller]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl From<&Location<'_>> for SourceLocation {
    fn from(loc: &Location<'_>) -> Self {
        Self {
            file: loc.file().to_string(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

/// Recorded outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub location: SourceLocation,
    /// Description of the failed condition. Empty on success.
    pub message: String,
}

/// Buffered console output of one test execution.
///
/// Cloning yields another handle to the same buffer. A transcript never
/// leaves the thread that runs its test; the runner extracts the text
/// with [`Transcript::take`] once the test has finished.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buf: Rc<RefCell<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn line(&self, text: impl fmt::Display) {
        let mut buf = self.buf.borrow_mut();
        // Writing to a String cannot fail
        let _ = fmt::Write::write_fmt(&mut *buf, format_args!("{text}\n"));
    }

    /// Append raw text.
    pub fn push_str(&self, text: &str) {
        self.buf.borrow_mut().push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.borrow().is_empty()
    }

    /// Remove and return everything written so far.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buf.borrow_mut())
    }
}

/// Signal that a failed check terminates the running test.
///
/// Produced by [`CheckResult::fatal`] and propagated out of the test body
/// with `?`. The runner recognizes it and reports the message instead of
/// treating it as an unexpected error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFatal {
    pub message: String,
}

impl fmt::Display for CheckFatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(NO_MESSAGE)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for CheckFatal {}

/// Handle returned by every check.
///
/// All methods are no-ops when the check succeeded.
#[derive(Debug, Clone)]
pub struct CheckResult {
    status: CheckStatus,
    out: Option<Transcript>,
}

impl CheckResult {
    pub(crate) fn new(status: CheckStatus, out: Option<Transcript>) -> Self {
        Self { status, out }
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Attach an informational note to a failed check.
    pub fn info(&self, message: &str) -> &Self {
        self.annotate("Info", message);
        self
    }

    /// Attach a warning to a failed check.
    pub fn warning(&self, message: &str) -> &Self {
        self.annotate("Warning", message);
        self
    }

    /// Terminate the test if the check failed.
    pub fn fatal(&self, message: &str) -> Result<(), CheckFatal> {
        if self.is_success() {
            return Ok(());
        }
        self.annotate("Fatal", message);
        Err(CheckFatal {
            message: message.to_string(),
        })
    }

    fn annotate(&self, label: &str, message: &str) {
        if self.is_success() {
            return;
        }
        if let Some(out) = &self.out {
            let message = if message.is_empty() { NO_MESSAGE } else { message };
            out.line(format_args!("    {label}: {message}"));
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console output of a run.
//!
//! Every test prints as one block:
//!
//! ```text
//! [ START mathAddition ]
//! <transcript>
//! [ END   mathAddition ]
//! ```
//!
//! Banners are colored by verdict. The block is written in one go by the
//! caller holding the output lock, so blocks of parallel tests never
//! interleave.

use std::io;
use std::path::Path;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::group::Summary;
use crate::runner::RunOutcome;

/// `Running N/M tests`, followed by a blank line.
pub fn running(out: &mut dyn WriteColor, selected: usize, total: usize) -> io::Result<()> {
    writeln!(out, "Running {selected}/{total} tests")?;
    writeln!(out)
}

/// The START/END block of one finished test.
pub fn test_block(out: &mut dyn WriteColor, name: &str, outcome: &RunOutcome) -> io::Result<()> {
    let banner = if outcome.passing {
        scheme::banner_pass()
    } else {
        scheme::banner_fail()
    };

    colored_line(out, &banner, &format!("[ START {name} ]"))?;
    out.write_all(outcome.transcript.as_bytes())?;
    if !outcome.passing
        && let Some(error) = &outcome.error
    {
        writeln!(out, "The following error occurred:")?;
        writeln!(out, "{error}")?;
    }
    colored_line(out, &banner, &format!("[ END   {name} ]"))?;
    writeln!(out)
}

/// Final counts and verdict.
pub fn done(out: &mut dyn WriteColor, summary: &Summary, passing: bool) -> io::Result<()> {
    writeln!(
        out,
        "{} passed, {} failed, {} run",
        summary.passed, summary.failed, summary.selected
    )?;
    if passing {
        colored_line(out, &scheme::pass(), "Done. All tests succeeded")
    } else {
        colored_line(out, &scheme::fail(), "Done. One or more tests failed")
    }
}

/// Answer to the `info` operand.
pub fn info(out: &mut dyn WriteColor, suite: &str, outdir: &Path) -> io::Result<()> {
    write!(out, "Suite: ")?;
    colored_line(out, &scheme::path(), suite)?;
    write!(out, "Output directory: ")?;
    colored_line(out, &scheme::path(), &outdir.display().to_string())
}

/// Write `text` in `spec`, resetting before the newline so backgrounds
/// do not bleed into the next line.
fn colored_line(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()?;
    writeln!(out)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

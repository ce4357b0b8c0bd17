// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Every test binary built on the harness accepts the same options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::color::ColorMode;

/// Run the tests compiled into this binary
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print information about the suite and exit
    #[arg(value_enum, value_name = "OPERAND")]
    pub operand: Option<Operand>,

    /// Suite data kind used when no previous state exists
    #[arg(long, value_name = "KIND", env = "VERDICT_DATA")]
    pub data: Option<String>,

    /// Only run tests that failed or never ran
    #[arg(short, long, env = "VERDICT_FAILING", overrides_with = "no_failing")]
    pub failing: bool,

    /// Run all selected tests, even if the config file sets `failing`
    #[arg(long, overrides_with = "failing")]
    pub no_failing: bool,

    /// Output format
    #[arg(long, value_name = "NAME", env = "VERDICT_FORMAT")]
    pub format: Option<String>,

    /// Run parallel-safe tests concurrently
    #[arg(
        short,
        long,
        env = "VERDICT_MULTITHREADED",
        overrides_with = "no_multithreaded"
    )]
    pub multithreaded: bool,

    /// Run every test serially, even if the config file sets `multithreaded`
    #[arg(long, overrides_with = "multithreaded")]
    pub no_multithreaded: bool,

    /// Output directory (default: <cwd>/<suite>.dir)
    #[arg(short, long, value_name = "DIR", env = "VERDICT_OUTDIR")]
    pub outdir: Option<PathBuf>,

    /// Only run tests matching these patterns (`name`, `pre*`, `*suf`, `*sub*`)
    #[arg(
        short,
        long = "unit",
        value_name = "PATTERN",
        value_delimiter = ',',
        env = "VERDICT_UNIT"
    )]
    pub unit: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, env = "VERDICT_VERBOSE")]
    pub verbose: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN", env = "VERDICT_COLOR")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "VERDICT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// `Some` when the command line decides failing-only mode.
    pub fn failing_override(&self) -> Option<bool> {
        flag_override(self.failing, self.no_failing)
    }

    /// `Some` when the command line decides multithreading.
    pub fn multithreaded_override(&self) -> Option<bool> {
        flag_override(self.multithreaded, self.no_multithreaded)
    }
}

fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Positional operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operand {
    /// Print the suite name and output directory
    Info,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

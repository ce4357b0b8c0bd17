// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against the `--no-color` flag and the environment.
    pub fn resolve(self, no_color_flag: bool) -> ColorChoice {
        let no_color = no_color_flag
            || self == ColorMode::Never
            || (self == ColorMode::Auto
                && (std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal()));
        resolve_color(self == ColorMode::Always, no_color)
    }
}

/// Combine the force and disable switches. Disabling wins.
pub fn resolve_color(force: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specs used by console output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// START/END banner of a passing test.
    pub fn banner_pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Green));
        spec.set_intense(true);
        spec
    }

    /// START/END banner of a failing test.
    pub fn banner_fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Red));
        spec.set_intense(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Suite names and paths in `info` output.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

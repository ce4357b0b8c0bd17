// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo suite.
//!
//! Set `VERDICT_DEMO_FAIL` to make `toggleSwitch` fail.

use std::process::ExitCode;

use verdict::{Compare, Harness, Panics, TestCase, UnitTest};

/// Environment variable that flips `toggleSwitch` to failing.
const FAIL_ENV: &str = "VERDICT_DEMO_FAIL";

#[derive(Default)]
struct Addition {
    cmp: Compare,
}

impl UnitTest for Addition {
    verdict::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        self.cmp.eq(2 + 2, 4);
        self.cmp.eq(i32::MAX.checked_add(1), None::<i32>);
        self.cmp.ne(0.1_f64 + 0.2, 0.3_f64).info("floating point addition is inexact");
        Ok(())
    }
}

impl TestCase for Addition {
    const NAME: &'static str = "arith::Addition";
}

#[derive(Default)]
struct Ordering {
    cmp: Compare,
}

impl UnitTest for Ordering {
    verdict::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        let mut values = vec![5, 3, 9, 1];
        values.sort_unstable();
        self.cmp.seq_eq(&values, &[1, 3, 5, 9]).fatal("sort is broken")?;
        self.cmp.le(values[0], values[1]);
        self.cmp.between(1, 9, values[2]);
        Ok(())
    }
}

impl TestCase for Ordering {
    const NAME: &'static str = "arith::Ordering";
}

#[derive(Default)]
struct Concat {
    cmp: Compare,
}

impl UnitTest for Concat {
    verdict::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        let joined = ["ver", "dict"].concat();
        self.cmp.eq(joined.as_str(), "verdict");
        self.cmp.holds("parses as a number", || "42".parse::<u32>().map(|n| n == 42));
        Ok(())
    }
}

impl TestCase for Concat {
    const NAME: &'static str = "strings::Concat";
}

#[derive(Default)]
struct Unwinding {
    cmp: Compare,
    panics: Panics,
}

impl UnitTest for Unwinding {
    verdict::facets!(cmp, panics);

    fn run(&mut self) -> anyhow::Result<()> {
        let empty: Vec<u8> = Vec::new();
        self.panics.expect_panic(|| {
            std::hint::black_box(empty[1]);
        });
        self.panics.expect_err("x".parse::<u8>());
        let parsed = "7".parse::<u8>();
        self.panics.expect_ok(parsed.as_ref());
        self.cmp.eq(parsed.ok(), Some(7_u8));
        Ok(())
    }
}

impl TestCase for Unwinding {
    const NAME: &'static str = "panics::Unwinding";
}

/// Reads the process environment, so it stays off the worker pool.
#[derive(Default)]
struct Switch {
    cmp: Compare,
}

impl UnitTest for Switch {
    verdict::facets!(cmp);

    fn run(&mut self) -> anyhow::Result<()> {
        let fail = std::env::var_os(FAIL_ENV).is_some();
        self.cmp.is_false(fail).info(&format!("{FAIL_ENV} is set"));
        Ok(())
    }
}

impl TestCase for Switch {
    const NAME: &'static str = "toggle::Switch";
    const PARALLEL: bool = false;
}

fn main() -> anyhow::Result<ExitCode> {
    let mut harness = Harness::new("verdict-demo");
    harness
        .add::<Addition>()?
        .add::<Ordering>()?
        .add::<Concat>()?
        .add::<Unwinding>()?
        .add::<Switch>()?;
    harness.run_from_args()
}

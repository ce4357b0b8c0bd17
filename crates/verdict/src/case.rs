// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case traits.
//!
//! A unit test is a type holding one or more facets. [`UnitTest`] is the
//! object-safe part used by runners and backends; [`TestCase`] adds the
//! compile-time identity used to register the type.

use crate::facet::Facet;

/// A runnable unit test instance.
pub trait UnitTest {
    /// Execute the test body.
    ///
    /// Return a [`CheckFatal`](crate::CheckFatal) (usually through `?` on
    /// [`CheckResult::fatal`](crate::CheckResult::fatal)) to stop early
    /// after a failed check. Any other error fails the test as well.
    fn run(&mut self) -> anyhow::Result<()>;

    /// Facets used by this test, in declaration order.
    fn facets(&self) -> Vec<&dyn Facet>;

    /// Mutable access to the same facets, used to bind output.
    fn facets_mut(&mut self) -> Vec<&mut dyn Facet>;

    /// A test passes when every one of its facets passes.
    fn passing(&self) -> bool {
        self.facets().iter().all(|f| f.is_passing())
    }
}

/// A registrable test type.
pub trait TestCase: UnitTest + Default + 'static {
    /// Stable identifier. `:` characters are removed to form the display
    /// name, so `"math::Add"` is reported and filtered as `"mathAdd"`.
    const NAME: &'static str;

    /// Whether this test may run concurrently with other tests.
    const PARALLEL: bool = true;
}

/// Flatten a test identifier into a filter-friendly display name.
pub fn display_name(name: &str) -> String {
    name.chars().filter(|&c| c != ':').collect()
}

/// Implement the facet accessors of [`UnitTest`] from a list of fields.
///
/// ```ignore
/// impl UnitTest for Addition {
///     verdict::facets!(cmp, panics);
///
///     fn run(&mut self) -> anyhow::Result<()> { ... }
/// }
/// ```
#[macro_export]
macro_rules! facets {
    ($($field:ident),* $(,)?) => {
        fn facets(&self) -> ::std::vec::Vec<&dyn $crate::Facet> {
            ::std::vec![$(&self.$field as &dyn $crate::Facet),*]
        }

        fn facets_mut(&mut self) -> ::std::vec::Vec<&mut dyn $crate::Facet> {
            ::std::vec![$(&mut self.$field as &mut dyn $crate::Facet),*]
        }
    };
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;

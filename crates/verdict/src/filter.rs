// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test name filtering.
//!
//! Patterns come in four forms:
//! - `name`: exact match
//! - `name*`: names starting with `name`
//! - `*name`: names ending with `name`
//! - `*name*`: names containing `name`

const WILDCARD: char = '*';

/// Predicate over test names built from a list of glob-like patterns.
#[derive(Debug, Default, Clone)]
pub struct NameFilter {
    exact: Vec<String>,
    prefix: Vec<String>,
    suffix: Vec<String>,
    contains: Vec<String>,
}

impl NameFilter {
    /// Create a filter from an initial set of patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        filter.add_patterns(patterns);
        filter
    }

    /// Classify and store each pattern. Wildcard-only patterns are dropped.
    pub fn add_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let p = pattern.as_ref();
            let leading = p.starts_with(WILDCARD);
            let trailing = p.ends_with(WILDCARD);

            match (leading, trailing) {
                (true, true) => {
                    if p.len() > 2 {
                        self.contains.push(p[1..p.len() - 1].to_string());
                    }
                }
                (true, false) => {
                    if p.len() > 1 {
                        self.suffix.push(p[1..].to_string());
                    }
                }
                (false, true) => {
                    if p.len() > 1 {
                        self.prefix.push(p[..p.len() - 1].to_string());
                    }
                }
                (false, false) => self.exact.push(p.to_string()),
            }
        }
    }

    /// True when no usable pattern was ever added.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.contains.is_empty()
    }

    /// Match `name` against every pattern.
    ///
    /// An empty filter returns `empty_is_match`.
    pub fn matches(&self, name: &str, empty_is_match: bool) -> bool {
        if self.is_empty() {
            return empty_is_match;
        }

        let fits = |p: &String| p.len() <= name.len();

        self.exact.iter().any(|p| p == name)
            || self.prefix.iter().any(|p| fits(p) && name.starts_with(p.as_str()))
            || self.suffix.iter().any(|p| fits(p) && name.ends_with(p.as_str()))
            || self.contains.iter().any(|p| fits(p) && name.contains(p.as_str()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

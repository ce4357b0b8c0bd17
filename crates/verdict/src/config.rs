// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file.
//!
//! ```toml
//! version = 1
//!
//! [run]
//! format = "toml"
//! multithreaded = true
//! unit = ["math*"]
//! ```
//!
//! Every key is optional. Command line flags take precedence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "verdict.toml";

const KNOWN_KEYS: &[&str] = &["version", "run"];
const KNOWN_RUN_KEYS: &[&str] = &[
    "format",
    "data",
    "failing",
    "multithreaded",
    "outdir",
    "unit",
];

/// Parsed verdict.toml.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Schema version. Only `1` exists.
    #[serde(default)]
    pub version: Option<i64>,

    #[serde(default)]
    pub run: RunConfig,
}

/// Defaults for the command line options.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    pub format: Option<String>,
    pub data: Option<String>,
    pub failing: Option<bool>,
    pub multithreaded: Option<bool>,
    /// Relative paths are resolved against the config file's directory.
    pub outdir: Option<PathBuf>,
    #[serde(default)]
    pub unit: Vec<String>,
}

/// Read and parse a config file.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut config =
        parse(&content).with_context(|| format!("invalid config {}", path.display()))?;

    if let Some(base) = path.parent()
        && let Some(outdir) = config.run.outdir.as_mut()
        && outdir.is_relative()
    {
        *outdir = base.join(&*outdir);
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config text. Unknown keys are reported and ignored.
pub fn parse(content: &str) -> anyhow::Result<Config> {
    let table: toml::Table = toml::from_str(content)?;
    for key in unknown_keys(&table) {
        tracing::warn!("unknown config key '{key}'");
    }

    let config: Config = toml::from_str(content)?;
    if let Some(version) = config.version
        && version != 1
    {
        anyhow::bail!("unsupported config version {version}");
    }
    Ok(config)
}

/// Dotted paths of keys this version does not understand.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown: Vec<String> = table
        .keys()
        .filter(|k| !KNOWN_KEYS.contains(&k.as_str()))
        .cloned()
        .collect();

    if let Some(toml::Value::Table(run)) = table.get("run") {
        unknown.extend(
            run.keys()
                .filter(|k| !KNOWN_RUN_KEYS.contains(&k.as_str()))
                .map(|k| format!("run.{k}")),
        );
    }
    unknown
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

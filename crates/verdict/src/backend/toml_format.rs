// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TOML file format.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::FileFormat;

/// TOML documents; test lists become arrays of tables.
pub struct TomlFormat;

impl FileFormat for TomlFormat {
    const NAME: &'static str = "toml";
    const EXTENSION: &'static str = "toml";

    fn encode<T: Serialize>(value: &T) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(value)?)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> anyhow::Result<T> {
        Ok(toml::from_str(text)?)
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file format.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::FileFormat;

/// Pretty-printed JSON documents.
pub struct JsonFormat;

impl FileFormat for JsonFormat {
    const NAME: &'static str = "json";
    const EXTENSION: &'static str = "json";

    fn encode<T: Serialize>(value: &T) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> anyhow::Result<T> {
        Ok(serde_json::from_str(text)?)
    }
}

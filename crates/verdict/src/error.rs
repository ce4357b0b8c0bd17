// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the harness.
//!
//! Errors raised by test bodies never reach this type: the runner turns
//! them into a failing outcome. Everything here is either a startup
//! configuration problem or a persistence failure, and aborts the run.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a run.
#[derive(Debug, Error)]
pub enum Error {
    /// A name was registered twice in the same registry.
    #[error("a {kind} named '{name}' was already registered")]
    DuplicateRegistration {
        /// Registry kind ("importer", "exporter", "suite data").
        kind: &'static str,
        /// Offending name.
        name: String,
    },

    /// Two test types produce the same display name.
    #[error("duplicate test name '{name}'")]
    DuplicateTest {
        /// Display name shared by both tests.
        name: String,
    },

    /// The requested importer/exporter format is not registered.
    #[error("could not find {kind} '{name}'")]
    UnknownFormat {
        /// "importer" or "exporter".
        kind: &'static str,
        /// Requested format name.
        name: String,
    },

    /// The requested suite data kind is not registered.
    #[error("could not find suite data format '{name}'")]
    UnknownDataKind {
        /// Requested kind.
        name: String,
    },

    /// Reading persisted state failed.
    #[error("failed to import {}: {message}", path.display())]
    Import {
        /// File being read.
        path: PathBuf,
        /// Underlying cause.
        message: String,
    },

    /// Writing persisted state failed.
    #[error("failed to export {}: {message}", path.display())]
    Export {
        /// File being written.
        path: PathBuf,
        /// Underlying cause.
        message: String,
    },

    /// Console output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn import(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Import {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Error::Export {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Snap package handling.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed sub-check produced while validating a structured value.
///
/// `path` is the dotted location of the offending member (`repository.url`),
/// empty when the value itself is at fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructFailure {
    pub path: String,
    pub message: String,
}

impl StructFailure {
    /// Create a failure for the member at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StructFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "At path: {} -- {}", self.path, self.message)
        }
    }
}

fn render_failures(failures: &[StructFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The primary error type used across Snap validation and identity handling.
#[derive(Debug, Error)]
pub enum SnapError {
    /// A value failed structural validation.
    ///
    /// `message` is the caller-facing prefix (e.g. `"package.json" is invalid`)
    /// and `failures` lists every sub-check that did not hold.
    #[error("{message}: {}", render_failures(.failures))]
    Validation {
        message: String,
        failures: Vec<StructFailure>,
    },

    /// A file required by a Snap package was absent.
    #[error("missing file: \"{file}\"")]
    MissingFile { file: String },

    /// A Snap id did not start with a recognized prefix.
    #[error("invalid snap id `{0}`: expected an \"npm:\" or \"local:\" prefix")]
    UnknownIdPrefix(String),

    /// Configuration errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SnapError {
    /// Struct failures carried by a validation error; empty for other kinds.
    pub fn failures(&self) -> &[StructFailure] {
        match self {
            SnapError::Validation { failures, .. } => failures.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_renders_prefix_and_failures() {
        let err = SnapError::Validation {
            message: "\"package.json\" is invalid".into(),
            failures: vec![
                StructFailure::new("name", "Expected a value of type `string`"),
                StructFailure::new("", "Expected an object"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "\"package.json\" is invalid: At path: name -- Expected a value of type `string`; Expected an object"
        );
        assert_eq!(err.failures().len(), 2);
    }

    #[test]
    fn non_validation_errors_have_no_failures() {
        let err = SnapError::MissingFile {
            file: "package.json".into(),
        };
        assert!(err.failures().is_empty());
        assert_eq!(err.to_string(), "missing file: \"package.json\"");
    }
}

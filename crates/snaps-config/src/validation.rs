// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;
use std::str::FromStr;

use snaps_core::SnapIdPrefix;

use crate::diagnostic::ConfigError;
use crate::model::SnapsConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns all collected validation errors (does not fail fast).
pub fn validate_config(config: &SnapsConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let prefixes = &config.validation.allowed_prefixes;

    if prefixes.is_empty() {
        errors.push(ConfigError::Validation {
            message: "validation.allowed_prefixes must not be empty".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (i, prefix) in prefixes.iter().enumerate() {
        if SnapIdPrefix::from_str(prefix).is_err() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "validation.allowed_prefixes[{i}] `{prefix}` is not a known snap id prefix (expected \"npm:\" or \"local:\")"
                ),
            });
        } else if !seen.insert(prefix) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate prefix `{prefix}` in validation.allowed_prefixes"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

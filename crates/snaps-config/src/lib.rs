// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for Snap package validation.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file lookup, `SNAPS_*` environment variable
//! overrides, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use snaps_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Validation mode: {}", config.validation.mode);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use tracing::debug;

pub use diagnostic::{ConfigError, figment_to_config_errors, suggest_key};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{SnapsConfig, ValidationConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<SnapsConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<SnapsConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(
    loaded: Result<SnapsConfig, figment::Error>,
) -> Result<SnapsConfig, Vec<ConfigError>> {
    let config = loaded.map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    debug!(
        mode = %config.validation.mode,
        prefixes = ?config.validation.allowed_prefixes,
        "configuration loaded"
    );
    Ok(config)
}

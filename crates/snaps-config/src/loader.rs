// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup: `./snaps.toml` > `~/.config/snaps/snaps.toml`, with environment
//! variable overrides via the `SNAPS_` prefix.

// figment::Error is external and cannot be boxed without wrapper
#![allow(clippy::result_large_err)]

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SnapsConfig;

/// Name of the configuration file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = "snaps.toml";

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `~/.config/snaps/snaps.toml` (user XDG config)
/// 3. `./snaps.toml` (local directory)
/// 4. `SNAPS_*` environment variables
pub fn load_config() -> Result<SnapsConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SnapsConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SnapsConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SnapsConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SnapsConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SnapsConfig::default()))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("snaps").join(CONFIG_FILE_NAME))
                .unwrap_or_default(),
        ))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(env_provider())
}

/// Map `SNAPS_VALIDATION_ALLOWED_PREFIXES` to `validation.allowed_prefixes`.
///
/// The key reaches the mapper with the prefix stripped but its case intact,
/// so it is lowercased first. Only the section separator becomes a dot;
/// underscores inside key names are kept.
pub fn env_provider() -> Env {
    Env::prefixed("SNAPS_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("validation_", "validation.", 1)
            .into()
    })
}

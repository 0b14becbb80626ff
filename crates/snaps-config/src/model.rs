// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snaps_core::{SnapError, SnapId, SnapIdPrefix, ValidationMode};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SnapsConfig {
    /// Package validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// How Snap packages are validated and which sources are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Whether assertions report every failed sub-check or only the first.
    #[serde(default)]
    pub mode: ValidationMode,

    /// Snap id prefixes accepted by this host (`"npm:"`, `"local:"`).
    #[serde(default = "default_allowed_prefixes")]
    pub allowed_prefixes: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            allowed_prefixes: default_allowed_prefixes(),
        }
    }
}

fn default_allowed_prefixes() -> Vec<String> {
    vec![
        SnapIdPrefix::Npm.as_str().to_string(),
        SnapIdPrefix::Local.as_str().to_string(),
    ]
}

impl ValidationConfig {
    /// The configured prefixes that name a known [`SnapIdPrefix`].
    pub fn allowed_id_prefixes(&self) -> Vec<SnapIdPrefix> {
        self.allowed_prefixes
            .iter()
            .filter_map(|p| SnapIdPrefix::from_str(p).ok())
            .collect()
    }

    /// Check that `id` carries a known prefix this host accepts.
    pub fn permit(&self, id: &SnapId) -> Result<SnapIdPrefix, SnapError> {
        let prefix = id.prefix()?;
        if self.allowed_id_prefixes().contains(&prefix) {
            Ok(prefix)
        } else {
            Err(SnapError::Config(format!(
                "snap id `{id}` uses prefix \"{prefix}\" which is not in validation.allowed_prefixes"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_both_sources() {
        let config = ValidationConfig::default();
        assert_eq!(config.mode, ValidationMode::CollectAll);
        assert_eq!(
            config.allowed_id_prefixes(),
            vec![SnapIdPrefix::Npm, SnapIdPrefix::Local]
        );
    }

    #[test]
    fn permit_rejects_disallowed_prefix() {
        let config = ValidationConfig {
            allowed_prefixes: vec!["npm:".into()],
            ..ValidationConfig::default()
        };
        let npm = SnapId::new(SnapIdPrefix::Npm, "my-snap");
        assert_eq!(config.permit(&npm).unwrap(), SnapIdPrefix::Npm);

        let local = SnapId::new(SnapIdPrefix::Local, "http://localhost:8080");
        let err = config.permit(&local).unwrap_err();
        assert!(matches!(err, SnapError::Config(_)));
        assert!(err.to_string().contains("local:"));
    }

    #[test]
    fn permit_rejects_unknown_prefix() {
        let config = ValidationConfig::default();
        let err = config.permit(&SnapId("foo:bar".into())).unwrap_err();
        assert!(matches!(err, SnapError::UnknownIdPrefix(_)));
    }
}

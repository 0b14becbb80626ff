// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed string-tag sets and identifiers shared across Snap handling.
//!
//! The string values of every enum here are compared against file contents
//! and external messages, so `Display`, `FromStr` and serde all use the exact
//! literal tag rather than the variant name.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::SnapError;

/// Well-known files inside an npm-published Snap package.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum NpmSnapFileName {
    #[strum(serialize = "package.json")]
    #[serde(rename = "package.json")]
    PackageJson,
    #[strum(serialize = "snap.manifest.json")]
    #[serde(rename = "snap.manifest.json")]
    Manifest,
}

impl NpmSnapFileName {
    /// The literal file name.
    pub const fn as_str(self) -> &'static str {
        match self {
            NpmSnapFileName::PackageJson => "package.json",
            NpmSnapFileName::Manifest => "snap.manifest.json",
        }
    }
}

/// Prefix tag distinguishing where a Snap is sourced from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SnapIdPrefix {
    /// Published to the npm registry.
    #[strum(serialize = "npm:")]
    #[serde(rename = "npm:")]
    Npm,
    /// Served from a local URL during development.
    #[strum(serialize = "local:")]
    #[serde(rename = "local:")]
    Local,
}

impl SnapIdPrefix {
    /// The literal prefix, including the trailing colon.
    pub const fn as_str(self) -> &'static str {
        match self {
            SnapIdPrefix::Npm => "npm:",
            SnapIdPrefix::Local => "local:",
        }
    }
}

/// Reason a locally computed manifest disagrees with the published one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SnapValidationFailureReason {
    #[strum(serialize = "\"name\" field mismatch")]
    #[serde(rename = "\"name\" field mismatch")]
    NameMismatch,
    #[strum(serialize = "\"version\" field mismatch")]
    #[serde(rename = "\"version\" field mismatch")]
    VersionMismatch,
    #[strum(serialize = "\"repository\" field mismatch")]
    #[serde(rename = "\"repository\" field mismatch")]
    RepositoryMismatch,
    #[strum(serialize = "\"shasum\" field mismatch")]
    #[serde(rename = "\"shasum\" field mismatch")]
    ShasumMismatch,
}

/// Names of the streams multiplexed between a host and a running Snap.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SnapStreamName {
    #[strum(serialize = "jsonRpc")]
    #[serde(rename = "jsonRpc")]
    JsonRpc,
    #[strum(serialize = "command")]
    #[serde(rename = "command")]
    Command,
}

/// The entry point a Snap exports for a given category of interaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum HandlerType {
    /// Generic JSON-RPC requests.
    #[strum(serialize = "onRpcRequest")]
    #[serde(rename = "onRpcRequest")]
    OnRpcRequest,
    /// Transaction insight requests.
    #[strum(serialize = "onTransaction")]
    #[serde(rename = "onTransaction")]
    OnTransaction,
    /// Keyring implementation.
    #[strum(serialize = "keyring")]
    #[serde(rename = "keyring")]
    SnapKeyring,
    /// Scheduled jobs.
    #[strum(serialize = "onCronjob")]
    #[serde(rename = "onCronjob")]
    OnCronjob,
}

/// Export names a Snap bundle may define, one per [`HandlerType`].
pub const SNAP_EXPORT_NAMES: [&str; 4] = ["onRpcRequest", "onTransaction", "keyring", "onCronjob"];

/// How a structural check reports the sub-checks that failed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationMode {
    /// Keep checking after the first failure and report all of them.
    #[default]
    CollectAll,
    /// Stop at the first failure.
    FailFast,
}

/// Identifier of an installed Snap, e.g. `npm:@metamask/example-snap`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapId(pub String);

impl SnapId {
    /// Build an id from a prefix and the package name or URL it points at.
    pub fn new(prefix: SnapIdPrefix, location: &str) -> Self {
        Self(format!("{}{location}", prefix.as_str()))
    }

    /// Split the id into its prefix and the remainder.
    pub fn parts(&self) -> Result<(SnapIdPrefix, &str), SnapError> {
        [SnapIdPrefix::Npm, SnapIdPrefix::Local]
            .into_iter()
            .find_map(|prefix| {
                self.0
                    .strip_prefix(prefix.as_str())
                    .map(|rest| (prefix, rest))
            })
            .ok_or_else(|| SnapError::UnknownIdPrefix(self.0.clone()))
    }

    /// The id's source prefix.
    pub fn prefix(&self) -> Result<SnapIdPrefix, SnapError> {
        self.parts().map(|(prefix, _)| prefix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

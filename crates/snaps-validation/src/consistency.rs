// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparison of a manifest's declared identity against `package.json`.

use serde_json::{Map, Value};
use snaps_core::{
    NpmSnapFileName, NpmSnapPackageJson, Repository, SnapError, SnapValidationFailureReason,
    ValidationMode,
};

use crate::failure::{FailureSink, kind_of};
use crate::package_json::invalid_file_message;

/// The fields of `snap.manifest.json` that must agree with `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestIdentity {
    /// `source.location.npm.packageName`
    pub package_name: String,
    pub version: String,
    pub repository: Option<Repository>,
}

impl ManifestIdentity {
    /// Extract the identity fields from a manifest object.
    pub fn from_manifest(manifest: &Map<String, Value>) -> Result<Self, SnapError> {
        let mut sink = FailureSink::new(ValidationMode::CollectAll);

        let version = string_at(&mut sink, manifest, &["version"]);
        let package_name = string_at(
            &mut sink,
            manifest,
            &["source", "location", "npm", "packageName"],
        );
        let repository = match manifest.get("repository") {
            None => None,
            Some(value) => match serde_json::from_value::<Repository>(value.clone()) {
                Ok(repository) => Some(repository),
                Err(e) => {
                    sink.push("repository", e.to_string());
                    None
                }
            },
        };

        sink.finish().map_err(|failures| SnapError::Validation {
            message: invalid_file_message(NpmSnapFileName::Manifest),
            failures,
        })?;

        match (package_name, version) {
            (Some(package_name), Some(version)) => Ok(Self {
                package_name,
                version,
                repository,
            }),
            _ => Err(SnapError::Internal(
                "manifest identity fields missing after validation".to_string(),
            )),
        }
    }
}

fn string_at(
    sink: &mut FailureSink,
    manifest: &Map<String, Value>,
    path: &[&str],
) -> Option<String> {
    let dotted = path.join(".");
    let mut current = path.first().and_then(|key| manifest.get(*key));
    for key in path.iter().skip(1) {
        current = current.and_then(|value| value.get(*key));
    }
    match current {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            sink.push(dotted, format!("Expected a string, but received: {}", kind_of(other)));
            None
        }
        None => {
            sink.push(dotted, "Expected a string, but received: undefined");
            None
        }
    }
}

/// Report which identity fields differ between a manifest and `package.json`.
///
/// Returns an empty list when they agree. Shasum comparison is left to the
/// caller that computes the bundle checksum.
pub fn check_manifest_consistency(
    manifest: &ManifestIdentity,
    package: &NpmSnapPackageJson,
) -> Vec<SnapValidationFailureReason> {
    let mut reasons = Vec::new();
    if manifest.package_name != package.name {
        reasons.push(SnapValidationFailureReason::NameMismatch);
    }
    if manifest.version != package.version {
        reasons.push(SnapValidationFailureReason::VersionMismatch);
    }
    if manifest.repository != package.repository {
        reasons.push(SnapValidationFailureReason::RepositoryMismatch);
    }
    reasons
}

// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of a Snap's file set.
//!
//! Turns [`UnvalidatedSnapFiles`] into [`SnapFiles`]. The manifest schema is
//! owned by the caller and plugged in through [`ManifestValidator`].

use serde_json::{Map, Value};
use snaps_core::{
    NpmSnapFileName, SnapError, SnapFiles, StructFailure, UnvalidatedSnapFiles, ValidationMode,
};
use tracing::debug;

use crate::failure::kind_of;
use crate::package_json::{invalid_file_message, parse_npm_snap_package_json};

/// Label used for the bundle when `package.json` names no `main` file.
const SOURCE_CODE_LABEL: &str = "source code";

/// Checks a parsed `snap.manifest.json` and produces its typed form.
pub trait ManifestValidator {
    type Manifest;

    fn validate(&self, manifest: &Value) -> Result<Self::Manifest, SnapError>;
}

/// Accepts any manifest that is a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectManifest;

impl ManifestValidator for JsonObjectManifest {
    type Manifest = Map<String, Value>;

    fn validate(&self, manifest: &Value) -> Result<Self::Manifest, SnapError> {
        manifest.as_object().cloned().ok_or_else(|| SnapError::Validation {
            message: invalid_file_message(NpmSnapFileName::Manifest),
            failures: vec![StructFailure::new(
                "",
                format!("Expected an object, but received: {}", kind_of(manifest)),
            )],
        })
    }
}

fn missing(file: &str) -> SnapError {
    SnapError::MissingFile {
        file: file.to_string(),
    }
}

/// Validate a Snap's files, consuming the unvalidated set.
///
/// The manifest and `package.json` must be present and valid, and source
/// code must be present. The SVG icon stays optional.
pub fn validate_snap_files<V: ManifestValidator>(
    files: UnvalidatedSnapFiles,
    validator: &V,
    mode: ValidationMode,
) -> Result<SnapFiles<V::Manifest>, SnapError> {
    let UnvalidatedSnapFiles {
        manifest,
        package_json,
        source_code,
        svg_icon,
    } = files;

    let manifest = manifest.ok_or_else(|| missing(NpmSnapFileName::Manifest.as_str()))?;
    let package_json = package_json.ok_or_else(|| missing(NpmSnapFileName::PackageJson.as_str()))?;

    let parsed_manifest = validator.validate(&manifest.result)?;
    let parsed_package = parse_npm_snap_package_json(&package_json.result, mode)?;

    let source_code = source_code
        .ok_or_else(|| missing(parsed_package.main.as_deref().unwrap_or(SOURCE_CODE_LABEL)))?;

    debug!(
        name = %parsed_package.name,
        version = %parsed_package.version,
        has_icon = svg_icon.is_some(),
        "snap files validated"
    );

    Ok(SnapFiles {
        manifest: manifest.with_result(parsed_manifest),
        package_json: package_json.with_result(parsed_package),
        source_code,
        svg_icon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use snaps_core::VirtualFile;

    fn json_file(path: &str, result: Value) -> VirtualFile<Value> {
        VirtualFile::new(path, result.to_string()).with_result(result)
    }

    fn validate(files: UnvalidatedSnapFiles) -> Result<SnapFiles<Map<String, Value>>, SnapError> {
        validate_snap_files(files, &JsonObjectManifest, ValidationMode::CollectAll)
    }

    fn complete_files() -> UnvalidatedSnapFiles {
        UnvalidatedSnapFiles {
            manifest: Some(json_file("snap.manifest.json", json!({ "version": "1.0.0" }))),
            package_json: Some(json_file(
                "package.json",
                json!({ "name": "my-snap", "version": "1.0.0", "main": "dist/bundle.js" }),
            )),
            source_code: Some(VirtualFile::new("dist/bundle.js", "module.exports = {};")),
            svg_icon: None,
        }
    }

    #[test]
    fn complete_files_validate() {
        let files = validate(complete_files()).unwrap();
        assert_eq!(files.package_json.result.name, "my-snap");
        assert_eq!(files.manifest.result.get("version"), Some(&json!("1.0.0")));
        assert_eq!(files.source_code.path, "dist/bundle.js");
        assert!(files.svg_icon.is_none());
    }

    #[test]
    fn icon_is_carried_over() {
        let mut files = complete_files();
        files.svg_icon = Some(VirtualFile::new("images/icon.svg", "<svg/>"));
        let validated = validate(files).unwrap();
        assert_eq!(validated.svg_icon.unwrap().value, "<svg/>");
    }

    #[test]
    fn missing_manifest_is_reported() {
        let mut files = complete_files();
        files.manifest = None;
        let err = validate(files).unwrap_err();
        assert!(matches!(err, SnapError::MissingFile { ref file } if file == "snap.manifest.json"));
    }

    #[test]
    fn missing_package_json_is_reported() {
        let mut files = complete_files();
        files.package_json = None;
        let err = validate(files).unwrap_err();
        assert!(matches!(err, SnapError::MissingFile { ref file } if file == "package.json"));
    }

    #[test]
    fn missing_source_code_names_main() {
        let mut files = complete_files();
        files.source_code = None;
        let err = validate(files).unwrap_err();
        assert!(matches!(err, SnapError::MissingFile { ref file } if file == "dist/bundle.js"));
    }

    #[test]
    fn invalid_package_json_is_rejected() {
        let mut files = complete_files();
        files.package_json = Some(json_file("package.json", json!({ "name": "Bad Name" })));
        let err = validate(files).unwrap_err();
        assert!(err.to_string().starts_with("\"package.json\" is invalid"));
        assert_eq!(err.failures().len(), 2);
    }

    #[test]
    fn non_object_manifest_is_rejected() {
        let mut files = complete_files();
        files.manifest = Some(json_file("snap.manifest.json", json!([])));
        let err = validate(files).unwrap_err();
        assert!(err.to_string().starts_with("\"snap.manifest.json\" is invalid"));
    }
}

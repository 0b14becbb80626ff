// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema checks and type guards for Snap package metadata.
//!
//! Small predicates for versions and package names compose into the
//! `package.json` check, which in turn feeds validation of a Snap's whole
//! file set. Predicates (`is_*`) never fail; assertions (`assert_*`) return a
//! [`snaps_core::SnapError::Validation`] naming the offending file and every
//! failed sub-check.

mod failure;

pub mod consistency;
pub mod files;
pub mod name;
pub mod package_json;
pub mod version;

pub use consistency::{ManifestIdentity, check_manifest_consistency};
pub use files::{JsonObjectManifest, ManifestValidator, validate_snap_files};
pub use name::{is_valid_package_name, is_valid_package_name_str};
pub use package_json::{
    assert_is_npm_snap_package_json, assert_is_npm_snap_package_json_with,
    invalid_file_message, is_npm_snap_package_json, parse_npm_snap_package_json,
    validate_package_json,
};
pub use version::{is_valid_version, is_valid_version_str};

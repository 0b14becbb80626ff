// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic version checks.
//!
//! Parsing is strict semver 2.0: no surrounding whitespace, no `v` prefix,
//! no partial versions, no leading zeros in numeric identifiers. Major, minor
//! and patch must each fit in a `u64`, so `1.0.99999999999999999999` is
//! rejected even though the grammar alone would allow it; npm caps numeric
//! parts as well.

use serde_json::Value;

/// Whether `version` is a valid semver 2.0 version string.
pub fn is_valid_version_str(version: &str) -> bool {
    semver::Version::parse(version).is_ok()
}

/// Whether `value` is a string holding a valid semver 2.0 version.
///
/// Non-strings are never valid.
pub fn is_valid_version(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_version_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_full_versions() {
        for v in [
            "1.0.0",
            "0.0.1",
            "10.20.30",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
        ] {
            assert!(is_valid_version_str(v), "{v} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_versions() {
        for v in ["", "1", "1.0", "v1.0.0", " 1.0.0", "1.0.0 ", "01.0.0", "1.0.0-", "a.b.c"] {
            assert!(!is_valid_version_str(v), "{v:?} should be invalid");
        }
    }

    #[test]
    fn numeric_parts_beyond_u64_are_invalid() {
        assert!(is_valid_version_str("1.0.18446744073709551615"));
        assert!(!is_valid_version_str("1.0.99999999999999999999"));
        assert!(!is_valid_version_str("18446744073709551616.0.0"));
    }

    #[test]
    fn non_strings_are_invalid() {
        assert!(!is_valid_version(&json!(1)));
        assert!(!is_valid_version(&json!(null)));
        assert!(!is_valid_version(&json!(["1.0.0"])));
        assert!(is_valid_version(&json!("1.2.3")));
    }
}

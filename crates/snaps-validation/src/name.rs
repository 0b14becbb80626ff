// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! npm package name checks.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Pattern for npm package names with an optional `@scope/` segment.
///
/// `*` is allowed in the scope segment but not in the name segment.
pub const NAME_PATTERN: &str = r"^(?:@[a-z0-9-*~][a-z0-9-*._~]*/)?[a-z0-9-~][a-z0-9-._~]*$";

/// Shortest accepted package name, in characters.
pub const MIN_NAME_LENGTH: usize = 1;

/// Longest accepted package name, in characters.
pub const MAX_NAME_LENGTH: usize = 214;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(NAME_PATTERN).unwrap());

/// Whether `name` is within the length bounds.
pub fn has_valid_name_length(name: &str) -> bool {
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&name.chars().count())
}

/// Whether `name` matches [`NAME_PATTERN`].
pub fn matches_name_pattern(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Whether `name` is a valid package name: length bound and pattern both hold.
pub fn is_valid_package_name_str(name: &str) -> bool {
    has_valid_name_length(name) && matches_name_pattern(name)
}

/// Whether `value` is a string holding a valid package name.
pub fn is_valid_package_name(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_package_name_str)
}

// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural checks for a Snap's `package.json`.
//!
//! The document is an open object: `version` and `name` are required,
//! `main` and `repository` are optional, and any other key is accepted and
//! left untouched. `repository` itself is closed and may only carry `type`
//! and `url`.

use serde_json::{Map, Value};
use snaps_core::{NpmSnapFileName, NpmSnapPackageJson, SnapError, StructFailure, ValidationMode};
use tracing::{debug, trace};

use crate::failure::{FailureSink, kind_of};
use crate::name::{
    MAX_NAME_LENGTH, MIN_NAME_LENGTH, NAME_PATTERN, has_valid_name_length, matches_name_pattern,
};
use crate::version::is_valid_version_str;

type FieldCheck = fn(&mut FailureSink, &Map<String, Value>);

const PACKAGE_JSON_CHECKS: [FieldCheck; 4] =
    [check_version, check_name, check_main, check_repository];

const REPOSITORY_KEYS: [&str; 2] = ["type", "url"];

/// Message prefix used when a Snap file fails validation.
pub fn invalid_file_message(file: NpmSnapFileName) -> String {
    format!("\"{file}\" is invalid")
}

/// Check `value` against the `package.json` schema.
///
/// Returns every failing sub-check in [`ValidationMode::CollectAll`], or only
/// the first in [`ValidationMode::FailFast`].
pub fn validate_package_json(
    value: &Value,
    mode: ValidationMode,
) -> Result<(), Vec<StructFailure>> {
    let mut sink = FailureSink::new(mode);
    let Some(object) = value.as_object() else {
        sink.push("", format!("Expected an object, but received: {}", kind_of(value)));
        return sink.finish();
    };

    for check in PACKAGE_JSON_CHECKS {
        check(&mut sink, object);
        if sink.is_done() {
            break;
        }
    }
    sink.finish()
}

/// Whether `value` is a valid Snap `package.json`. Never fails.
pub fn is_npm_snap_package_json(value: &Value) -> bool {
    validate_package_json(value, ValidationMode::FailFast).is_ok()
}

/// Assert that `value` is a valid Snap `package.json`, reporting all failures.
pub fn assert_is_npm_snap_package_json(value: &Value) -> Result<(), SnapError> {
    assert_is_npm_snap_package_json_with(value, ValidationMode::CollectAll)
}

/// Like [`assert_is_npm_snap_package_json`], with an explicit reporting mode.
pub fn assert_is_npm_snap_package_json_with(
    value: &Value,
    mode: ValidationMode,
) -> Result<(), SnapError> {
    let file = NpmSnapFileName::PackageJson;
    validate_package_json(value, mode).map_err(|failures| {
        debug!(file = %file, failures = failures.len(), "snap file failed validation");
        SnapError::Validation {
            message: invalid_file_message(file),
            failures,
        }
    })?;
    trace!(file = %file, "snap file is valid");
    Ok(())
}

/// Validate `value` and convert it into the typed `package.json` view.
pub fn parse_npm_snap_package_json(
    value: &Value,
    mode: ValidationMode,
) -> Result<NpmSnapPackageJson, SnapError> {
    assert_is_npm_snap_package_json_with(value, mode)?;
    serde_json::from_value(value.clone()).map_err(|e| {
        SnapError::Internal(format!("validated package.json did not deserialize: {e}"))
    })
}

fn check_version(sink: &mut FailureSink, object: &Map<String, Value>) {
    let Some(version) = expect_string(sink, "version", object.get("version")) else {
        return;
    };
    if !is_valid_version_str(version) {
        sink.push("version", format!("Expected SemVer version, got \"{version}\""));
    }
}

fn check_name(sink: &mut FailureSink, object: &Map<String, Value>) {
    let Some(name) = expect_string(sink, "name", object.get("name")) else {
        return;
    };
    if !has_valid_name_length(name) {
        sink.push(
            "name",
            format!(
                "Expected a string with a length between `{MIN_NAME_LENGTH}` and `{MAX_NAME_LENGTH}` but received one with a length of `{}`",
                name.chars().count()
            ),
        );
        if sink.is_done() {
            return;
        }
    }
    if !matches_name_pattern(name) {
        sink.push(
            "name",
            format!("Expected a string matching `{NAME_PATTERN}` but received \"{name}\""),
        );
    }
}

fn check_main(sink: &mut FailureSink, object: &Map<String, Value>) {
    if let Some(main) = object.get("main") {
        expect_non_empty_string(sink, "main", Some(main));
    }
}

fn check_repository(sink: &mut FailureSink, object: &Map<String, Value>) {
    let Some(repository) = object.get("repository") else {
        return;
    };
    let Some(repository) = repository.as_object() else {
        sink.push(
            "repository",
            format!("Expected an object, but received: {}", kind_of(repository)),
        );
        return;
    };

    for key in REPOSITORY_KEYS {
        expect_non_empty_string(sink, &format!("repository.{key}"), repository.get(key));
        if sink.is_done() {
            return;
        }
    }
    for (key, value) in repository {
        if !REPOSITORY_KEYS.contains(&key.as_str()) {
            sink.push(
                format!("repository.{key}"),
                format!("Expected a value of type `never`, but received: {}", kind_of(value)),
            );
            if sink.is_done() {
                return;
            }
        }
    }
}

/// Record a failure unless `value` is a string; returns the string.
fn expect_string<'a>(
    sink: &mut FailureSink,
    path: &str,
    value: Option<&'a Value>,
) -> Option<&'a str> {
    match value {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            sink.push(path, format!("Expected a string, but received: {}", kind_of(other)));
            None
        }
        None => {
            sink.push(path, "Expected a string, but received: undefined");
            None
        }
    }
}

fn expect_non_empty_string(sink: &mut FailureSink, path: &str, value: Option<&Value>) {
    if expect_string(sink, path, value).is_some_and(str::is_empty) {
        sink.push(path, "Expected a nonempty string but received an empty one");
    }
}

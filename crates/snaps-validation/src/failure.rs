// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collection of struct failures during a check.

use serde_json::Value;
use snaps_core::{StructFailure, ValidationMode};

/// Accumulates failures from the sub-checks of one structural check.
#[derive(Debug)]
pub(crate) struct FailureSink {
    mode: ValidationMode,
    failures: Vec<StructFailure>,
}

impl FailureSink {
    pub(crate) fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            failures: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.failures.push(StructFailure::new(path, message));
    }

    /// True once no further sub-check should run.
    pub(crate) fn is_done(&self) -> bool {
        self.mode == ValidationMode::FailFast && !self.failures.is_empty()
    }

    pub(crate) fn finish(self) -> Result<(), Vec<StructFailure>> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(self.failures)
        }
    }
}

/// Short name of a JSON value's type, used in failure messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

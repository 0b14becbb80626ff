// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory files making up a Snap package, before and after validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::package::NpmSnapPackageJson;

/// A file held in memory: its path, raw text, and parsed result.
///
/// `T` is `()` for files with no parsed form, such as bundled source code or
/// an SVG icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualFile<T = ()> {
    pub path: String,
    pub value: String,
    pub result: T,
}

impl VirtualFile {
    /// A raw file with no parsed result.
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            result: (),
        }
    }
}

impl<T> VirtualFile<T> {
    /// Replace the parsed result, keeping path and raw contents.
    pub fn with_result<U>(self, result: U) -> VirtualFile<U> {
        VirtualFile {
            path: self.path,
            value: self.value,
            result,
        }
    }
}

/// Files read from a Snap package whose contents have not been checked yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnvalidatedSnapFiles {
    pub manifest: Option<VirtualFile<Value>>,
    pub package_json: Option<VirtualFile<Value>>,
    pub source_code: Option<VirtualFile>,
    pub svg_icon: Option<VirtualFile>,
}

/// Files of a Snap package that passed validation.
///
/// `M` is the manifest type produced by whichever manifest validator the
/// caller used.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapFiles<M> {
    pub manifest: VirtualFile<M>,
    pub package_json: VirtualFile<NpmSnapPackageJson>,
    pub source_code: VirtualFile,
    pub svg_icon: Option<VirtualFile>,
}

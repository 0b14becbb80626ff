// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Snap package handling.
//!
//! This crate provides the shared error type, the closed string-tag sets
//! (file names, id prefixes, handler types), the typed `package.json` view,
//! in-memory file sets, and the RPC hook trait used to invoke a Snap.

pub mod error;
pub mod files;
pub mod package;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{SnapError, StructFailure};
pub use files::{SnapFiles, UnvalidatedSnapFiles, VirtualFile};
pub use package::{NpmSnapPackageJson, Repository};
pub use traits::{SnapRpcHook, SnapRpcHookArgs};
pub use types::{
    HandlerType, NpmSnapFileName, SNAP_EXPORT_NAMES, SnapId, SnapIdPrefix, SnapStreamName,
    SnapValidationFailureReason, ValidationMode,
};

// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for talking to a running Snap.
//!
//! Traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod rpc;

pub use rpc::{SnapRpcHook, SnapRpcHookArgs};

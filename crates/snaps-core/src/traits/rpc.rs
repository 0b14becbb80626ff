// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hook used to invoke a Snap's exported handler.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SnapError;
use crate::types::HandlerType;

/// Arguments passed when invoking a Snap handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapRpcHookArgs {
    /// Origin of the caller (a dapp URL or another Snap id).
    pub origin: String,
    /// Which exported entry point to call.
    pub handler: HandlerType,
    /// The request payload, forwarded untouched.
    pub request: Map<String, Value>,
}

/// Invokes a handler on a Snap and resolves to its untyped result.
///
/// Implemented by whatever executes Snaps; routing and sandboxing live there.
#[async_trait]
pub trait SnapRpcHook: Send + Sync {
    async fn call(&self, args: SnapRpcHookArgs) -> Result<Value, SnapError>;
}

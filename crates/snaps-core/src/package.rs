// SPDX-FileCopyrightText: 2026 Snaps Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed view of a Snap's `package.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Source repository declared in `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// The subset of `package.json` a Snap package must carry.
///
/// Only constructed after the raw document has passed validation. Keys not
/// modelled here are kept in `extra` so the document survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpmSnapPackageJson {
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_are_preserved() {
        let raw = json!({
            "name": "my-snap",
            "version": "1.0.0",
            "repository": { "type": "git", "url": "https://github.com/x/y.git" },
            "license": "MIT",
            "scripts": { "build": "mm-snap build" }
        });
        let pkg: NpmSnapPackageJson = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(pkg.repository.as_ref().unwrap().kind, "git");
        assert_eq!(pkg.extra.get("license"), Some(&json!("MIT")));
        assert!(pkg.main.is_none());
        assert_eq!(serde_json::to_value(&pkg).unwrap(), raw);
    }
}

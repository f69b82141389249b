//! Configuration for the optional token-bridge extension.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque configuration for the token-bridge extension module.
///
/// The extension owns its own schema; this crate passes the record through
/// unchanged and only defines one contract: an empty record means the
/// extension is not deployed. The default is empty.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct BridgeExtensionConfig(pub BTreeMap<String, serde_json::Value>);

impl BridgeExtensionConfig {
    /// Whether the extension will be deployed at all.
    pub fn is_enabled(&self) -> bool {
        !self.0.is_empty()
    }
}

impl FromIterator<(String, serde_json::Value)> for BridgeExtensionConfig {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        BridgeExtensionConfig(iter.into_iter().collect())
    }
}

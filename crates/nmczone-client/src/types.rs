//! Wire types returned by the node.

use nmczone_core::RawName;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Namespace;

/// One entry of a `name_filter` / `name_show` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Full registry name, e.g. `d/example`
    pub name: String,

    /// Raw value string, normally JSON
    #[serde(default)]
    pub value: String,

    /// Blocks until expiry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// Expiry marker; older nodes set it to `1`, newer ones to a boolean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<Value>,
}

impl NameEntry {
    /// Returns true if the node marked the name as expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match &self.expired {
            None | Some(Value::Null) => false,
            Some(Value::Bool(expired)) => *expired,
            Some(Value::Number(n)) => n.as_i64() != Some(0),
            Some(_) => true,
        }
    }

    /// Decode into a [`RawName`].
    ///
    /// Returns `None` for expired names, names outside `namespace` and
    /// values that are not valid JSON.
    #[must_use]
    pub fn into_raw_name(self, namespace: &Namespace, block: u64) -> Option<RawName> {
        if self.is_expired() {
            debug!(name = %self.name, "skipping expired name");
            return None;
        }

        let Some(zone_name) = namespace.zone_name(&self.name) else {
            debug!(name = %self.name, prefix = %namespace.prefix, "skipping name outside namespace");
            return None;
        };

        match serde_json::from_str::<Value>(&self.value) {
            Ok(json) => Some(RawName::new(zone_name, json, block)),
            Err(error) => {
                debug!(name = %self.name, %error, "skipping name with unparsable value");
                None
            }
        }
    }
}

/// The part of a `getinfo` response this crate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Current block height
    pub blocks: u64,
}

//! Name listing calls.

use crate::types::NameEntry;
use crate::{RegistryClient, Result};
use serde_json::json;

/// Name listing calls
pub struct NamesApi<'a> {
    client: &'a RegistryClient,
}

impl<'a> NamesApi<'a> {
    pub(crate) const fn new(client: &'a RegistryClient) -> Self {
        Self { client }
    }

    /// List every current name matching `pattern` (`name_filter`).
    ///
    /// Expired names may still be reported; see [`NameEntry::is_expired`].
    pub async fn filter(&self, pattern: &str) -> Result<Vec<NameEntry>> {
        self.client.call("name_filter", json!([pattern, 0])).await
    }

    /// Look up a single name (`name_show`)
    pub async fn show(&self, name: &str) -> Result<NameEntry> {
        self.client.call("name_show", json!([name])).await
    }
}

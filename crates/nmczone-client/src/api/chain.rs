//! Chain state calls.

use crate::config::HeightMethod;
use crate::types::ChainInfo;
use crate::{RegistryClient, Result};
use serde_json::json;

/// Chain state calls
pub struct ChainApi<'a> {
    client: &'a RegistryClient,
}

impl<'a> ChainApi<'a> {
    pub(crate) const fn new(client: &'a RegistryClient) -> Self {
        Self { client }
    }

    /// Node summary (`getinfo`)
    pub async fn info(&self) -> Result<ChainInfo> {
        self.client.call("getinfo", json!([])).await
    }

    /// Current block height (`getblockcount`)
    pub async fn block_count(&self) -> Result<u64> {
        self.client.call("getblockcount", json!([])).await
    }

    /// Current block height using the given call
    pub async fn height(&self, method: HeightMethod) -> Result<u64> {
        match method {
            HeightMethod::Getinfo => Ok(self.info().await?.blocks),
            HeightMethod::Getblockcount => self.block_count().await,
        }
    }
}

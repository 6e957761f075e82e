//! The name source used by the zone generator.

use async_trait::async_trait;
use nmczone_core::RawName;
use tracing::{info, instrument};

use crate::config::{HeightMethod, Namespace};
use crate::{RegistryClient, Result};

/// Default `name_filter` pattern for the domain namespace
pub const DEFAULT_NAME_FILTER: &str = "^d/[a-z0-9_-]+$";

/// Everything fetched from the registry for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameListing {
    /// Current, parsable names in registry order
    pub names: Vec<RawName>,

    /// Block height the listing belongs to
    pub block_height: u64,
}

/// Something that can list the current names
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Fetch all current names and the block height
    async fn fetch_names(&self) -> Result<NameListing>;
}

/// [`NameSource`] backed by a Namecoin node
#[derive(Clone)]
pub struct RegistrySource {
    client: RegistryClient,
    filter: String,
    namespace: Namespace,
    height_method: HeightMethod,
}

impl RegistrySource {
    /// Create a source with the default filter, namespace and height call
    #[must_use]
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            filter: DEFAULT_NAME_FILTER.to_string(),
            namespace: Namespace::default(),
            height_method: HeightMethod::default(),
        }
    }

    /// Set the `name_filter` pattern
    #[must_use]
    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter = pattern.into();
        self
    }

    /// Set the namespace mapping
    #[must_use]
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set the call used to read the block height
    #[must_use]
    pub fn height_method(mut self, method: HeightMethod) -> Self {
        self.height_method = method;
        self
    }
}

#[async_trait]
impl NameSource for RegistrySource {
    #[instrument(skip(self), fields(endpoint = %self.client.endpoint(), filter = %self.filter))]
    async fn fetch_names(&self) -> Result<NameListing> {
        let entries = self.client.names().filter(&self.filter).await?;
        let block_height = self.client.chain().height(self.height_method).await?;

        let listed = entries.len();
        let names: Vec<RawName> = entries
            .into_iter()
            .filter_map(|entry| entry.into_raw_name(&self.namespace, block_height))
            .collect();

        info!(
            listed,
            kept = names.len(),
            block_height,
            "fetched names from registry"
        );

        Ok(NameListing {
            names,
            block_height,
        })
    }
}

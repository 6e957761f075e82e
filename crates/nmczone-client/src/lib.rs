//! JSON-RPC client for a Namecoin node.
//!
//! Provides [`RegistryClient`] for raw calls and [`RegistrySource`], the
//! [`NameSource`] the zone generator reads its names from.

mod client;
mod config;
mod error;
mod source;
mod types;
pub mod api;

pub use client::{RegistryClient, RegistryClientBuilder};
pub use config::*;
pub use error::{RegistryError, Result};
pub use source::{NameListing, NameSource, RegistrySource, DEFAULT_NAME_FILTER};
pub use types::{ChainInfo, NameEntry};

//! # nmczone-cli
//!
//! Command-line zone generator for the `.bit` namespace.
//!
//! ## Commands
//!
//! - **generate**: list names from a Namecoin node and write the zone file,
//!   the block count file and, optionally, the collected imports
//! - **render**: turn a saved `name_filter` dump into zone lines offline
//! - **config**: show, initialize or locate the TOML configuration

pub mod cli;
pub mod config;
pub mod output;
pub mod writer;

pub use cli::run;

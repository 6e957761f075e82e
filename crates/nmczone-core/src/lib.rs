//! Core of the Namecoin zone generator.
//!
//! This crate turns the JSON values stored under `d/` names into DNS
//! master-file records. It performs no I/O:
//!
//! - **Validators**: domain, address and TXT checks in [`validate`]
//! - **Resolver**: [`resolve`] interprets one name's directives, recursing into `map`
//! - **Assembler**: [`assemble_zone`] resolves a whole listing and enforces
//!   CNAME exclusivity across it; [`assemble_zone_in`] writes owner names
//!   relative to an [`Origin`] such as `bit`
//!
//! # Example
//!
//! ```rust
//! use nmczone_core::{assemble_zone, RawName};
//! use serde_json::json;
//!
//! let names = vec![RawName::new("example.bit", json!({ "ip": "1.2.3.4" }), 0)];
//! let lines: Vec<String> = assemble_zone(&names).lines().collect();
//! assert_eq!(lines, ["example.bit. IN A 1.2.3.4"]);
//! ```

pub mod encoding;
mod error;
pub mod resolver;
pub mod types;
pub mod validate;
pub mod zone;

pub use error::{ResolveError, Result, ZoneError};
pub use resolver::{resolve, Directive};
pub use types::*;
pub use zone::{assemble_zone, assemble_zone_in, AssembledZone, Origin, ZoneRecords, ZoneStats};

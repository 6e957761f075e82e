use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::{Result, ZoneError};

/// Zone serial number derived from the registry's block height
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneSerial(u64);

impl ZoneSerial {
    /// Compute `block * multiplier`.
    ///
    /// Values past the 32-bit SOA serial range are still returned; the
    /// template decides what to do with them.
    pub fn new(block: u64, multiplier: u64) -> Result<Self> {
        let serial = block
            .checked_mul(multiplier)
            .ok_or(ZoneError::SerialOverflow { block, multiplier })?;

        if serial > u64::from(u32::MAX) {
            warn!(serial, block, multiplier, "zone serial exceeds 32-bit SOA range");
        }

        Ok(Self(serial))
    }

    /// The raw serial value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns true if the serial fits an SOA serial field
    #[must_use]
    pub const fn fits_soa(self) -> bool {
        self.0 <= u32::MAX as u64
    }
}

impl fmt::Display for ZoneSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! RPC method groups.

mod chain;
mod names;

pub use chain::ChainApi;
pub use names::NamesApi;

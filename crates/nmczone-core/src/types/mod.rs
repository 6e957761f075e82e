mod name;
mod record;
mod serial;

pub use name::*;
pub use record::*;
pub use serial::*;

//! nmczone - .bit zone file generator

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    nmczone_cli::run().await
}

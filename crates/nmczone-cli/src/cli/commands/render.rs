//! `nmczone render` - offline rendering of a saved `name_filter` dump.

use anyhow::{Context as _, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

use nmczone_client::{NameEntry, Namespace};
use nmczone_core::{assemble_zone_in, AssembledZone, RawName};

use crate::cli::args::RenderArgs;
use crate::output;

pub fn execute(args: RenderArgs) -> Result<()> {
    let dump = read_input(&args.input)?;
    let zone = render_dump(&dump, &Namespace::new(args.prefix, args.tld), args.block)?;

    let mut stdout = std::io::stdout().lock();
    if args.imports {
        output::print_imports(&mut stdout, &zone, args.format)?;
    } else {
        output::print_records(&mut stdout, &zone, args.format)?;
    }
    stdout.flush()?;

    Ok(())
}

/// Assemble a zone from the text of a `name_filter` response.
pub fn render_dump(dump: &str, namespace: &Namespace, block: u64) -> Result<AssembledZone> {
    let entries: Vec<NameEntry> =
        serde_json::from_str(dump).context("input is not a JSON array of name entries")?;

    let listed = entries.len();
    let names: Vec<RawName> = entries
        .into_iter()
        .filter_map(|entry| entry.into_raw_name(namespace, block))
        .collect();

    let zone = assemble_zone_in(&names, &namespace.origin());
    let stats = zone.stats();
    info!(
        listed,
        kept = names.len(),
        records = stats.emitted(),
        suppressed = stats.suppressed,
        imports = stats.imports,
        "rendered dump"
    );

    Ok(zone)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

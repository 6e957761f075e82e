//! `nmczone generate` - full zone generation run.

use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::info;

use nmczone_client::NameSource;
use nmczone_core::{assemble_zone_in, RecordKind, ZoneSerial, ZoneStats};

use super::Context;
use crate::cli::args::GenerateArgs;
use crate::config::Config;
use crate::writer;

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub block_height: u64,
    pub serial: ZoneSerial,
    pub stats: ZoneStats,
    /// Rendered zone, kept only for dry runs
    pub rendered: Option<String>,
}

pub async fn execute(ctx: &Context, args: GenerateArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let source = config.registry_source()?;

    let summary = run_pipeline(&source, &config, args.dry_run).await?;

    if let Some(zone) = summary.rendered {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(zone.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

/// Fetch, assemble and write one zone.
///
/// Nothing is written until the whole zone has been rendered in memory.
/// The zone file goes first, then the block count, then the imports.
pub async fn run_pipeline(source: &dyn NameSource, config: &Config, dry_run: bool) -> Result<RunSummary> {
    let listing = source
        .fetch_names()
        .await
        .context("failed to fetch names from the registry")?;

    let template = std::fs::read_to_string(&config.template)
        .with_context(|| format!("failed to read zone template {}", config.template.display()))?;

    let serial = ZoneSerial::new(listing.block_height, config.serial_multiplier)?;
    let zone = assemble_zone_in(&listing.names, &config.namespace().origin());
    let stats = zone.stats();

    info!(
        names = stats.names,
        records = stats.emitted(),
        cname = stats.count(RecordKind::Cname),
        a = stats.count(RecordKind::A),
        aaaa = stats.count(RecordKind::Aaaa),
        ns = stats.count(RecordKind::Ns),
        dname = stats.count(RecordKind::Dname),
        txt = stats.count(RecordKind::Txt),
        suppressed = stats.suppressed,
        duplicate_cnames = stats.duplicate_cnames,
        imports = stats.imports,
        "assembled zone"
    );

    let rendered = writer::render_zone(&template, serial, zone.lines());

    if dry_run {
        return Ok(RunSummary {
            block_height: listing.block_height,
            serial,
            stats,
            rendered: Some(rendered),
        });
    }

    writer::write_zone(&config.zonefile, &rendered)?;
    writer::write_block_count(&config.block_count, listing.block_height)?;
    if let Some(path) = &config.imports_file {
        writer::write_imports(path, zone.imports())?;
    }

    info!(
        zonefile = %config.zonefile.display(),
        serial = %serial,
        block_height = listing.block_height,
        "zone written"
    );

    Ok(RunSummary {
        block_height: listing.block_height,
        serial,
        stats,
        rendered: None,
    })
}

//! Output formats for commands that print to stdout.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use nmczone_core::{AssembledZone, ImportIntent, ResolvedRecord};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Zone file lines, or TOML for configuration
    #[default]
    #[value(alias = "zone", alias = "toml")]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Print the zone's records in emission order.
pub fn print_records(out: &mut impl Write, zone: &AssembledZone, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in zone.lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<&ResolvedRecord> = zone.records().collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print the zone's import intents.
///
/// The text form is one `domain import` pair per line.
pub fn print_imports(out: &mut impl Write, zone: &AssembledZone, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for intent in zone.imports() {
                writeln!(out, "{} {}", intent.domain, intent.import_name)?;
            }
        }
        OutputFormat::Json => {
            let imports: Vec<&ImportIntent> = zone.imports().collect();
            serde_json::to_writer_pretty(&mut *out, &imports)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::output::OutputFormat;

/// Generate a DNS zone file for .bit from a Namecoin node
///
/// Lists the current `d/` names over JSON-RPC, turns their values into
/// zone records and writes them below a template.
#[derive(Parser, Debug)]
#[command(name = "nmczone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, env = "NMCZONE_CONFIG", global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Node RPC endpoint, overriding `json_rpc` from the config file
    #[arg(long, env = "NMCZONE_RPC_URL", global = true)]
    pub rpc_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Formats for log lines on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch names from the node and write the zone file
    Generate(GenerateArgs),

    /// Render a saved `name_filter` dump without contacting a node
    Render(RenderArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

// ============================================================================
// Generate command
// ============================================================================

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Print the zone to stdout instead of writing any file
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Render command
// ============================================================================

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON array of `name_filter` entries; `-` reads stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print import intents instead of records
    #[arg(long)]
    pub imports: bool,

    /// Registry prefix stripped from names
    #[arg(long, default_value = "d/")]
    pub prefix: String,

    /// Zone the names are written under; empty keeps owners relative to $ORIGIN
    #[arg(long, default_value = "bit")]
    pub tld: String,

    /// Block height stamped on the names
    #[arg(long, default_value_t = 0)]
    pub block: u64,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the configuration file path
    Path,
}

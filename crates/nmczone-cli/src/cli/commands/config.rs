//! `nmczone config` - configuration file management.

use anyhow::{bail, Result};

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show { format } => show_config(ctx, format),
        ConfigCommands::Init { force } => init_config(ctx, force),
        ConfigCommands::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context, format: OutputFormat) -> Result<()> {
    let config = ctx.load_config()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => print!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;

    if path.exists() && !force {
        bail!(
            "{} already exists\n\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    Config::sample().save(path)?;
    println!("Wrote {}", path.display());
    println!("Edit json_rpc, zonefile and block_count before running `nmczone generate`.");

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

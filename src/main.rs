// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use zipdir::fs::ArchiveBuilder;

/// Packs a directory into `<name>.zip` in the current directory, storing every file uncompressed.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The directory to archive.
    root: PathBuf,

    /// Skip symbolic links instead of storing their targets.
    #[arg(long)]
    no_follow_links: bool,
}

fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();
    tracing::debug!(?args, "got arguments");

    let summary = ArchiveBuilder::new(&args.root)
        .follow_links(!args.no_follow_links)
        .build()
        .with_context(|| format!("unable to archive '{}'", args.root.display()))?;

    println!("Successfully written ZIP file '{}' ({} entries).", summary.output.display(), summary.entries);
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("unable to initialise logging")
}

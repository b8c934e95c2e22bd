//! Convert command - vendor bar files to canonical storage
//!
//! Converts every file directly under the source directory into the engine's
//! canonical data layout under the destination directory. Missing directory
//! arguments are prompted for interactively, matching how operators run this
//! against freshly unzipped vendor dumps.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use market_common::data::Resolution;
use market_common::storage::CsvBarWriter;

use crate::convert::{self, ConversionJob};

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source directory of unzipped vendor data
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Destination engine data directory
    #[arg(long)]
    pub destination_dir: Option<String>,
}

/// Execute the convert command
pub fn execute(args: ConvertArgs) -> Result<()> {
    info!("NSE market data converter");
    info!("Transforms vendor intraday bar dumps into the engine's canonical data format.");
    info!("NOTE: this will overwrite existing canonical files for the converted instruments.");

    let source_dir = resolve_dir(args.source_dir, "1. Source directory of vendor data: ")?;
    let destination_dir = resolve_dir(args.destination_dir, "2. Destination data directory: ")?;

    // Hidden automatically when stderr is not a terminal
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let mut job = ConversionJob::new(source_dir, destination_dir, Resolution::Minute);
    convert::run(&mut job, &CsvBarWriter, Some(progress))?;

    Ok(())
}

/// Use the supplied directory, or prompt the operator when it is missing or
/// blank
fn resolve_dir(value: Option<String>, prompt: &str) -> Result<PathBuf> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => prompt_line(prompt)?,
    };

    // A trailing slash only gets in the way of path building
    Ok(PathBuf::from(value.trim().trim_end_matches(['/', '\\'])))
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

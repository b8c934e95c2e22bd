//! Command-line interface
//!
//! Provides CLI commands for the data converter.

pub mod convert;

use clap::{Parser, Subcommand};

/// Data Converter CLI
#[derive(Parser)]
#[command(name = "data-converter")]
#[command(about = "Converts vendor intraday bar files into canonical engine data")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a directory of vendor bar files
    Convert(convert::ConvertArgs),
}

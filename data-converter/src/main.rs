//! Data converter CLI
//!
//! Provides commands for:
//! - `convert`: Convert a directory of vendor bar files into the engine's
//!   canonical data layout

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use data_converter::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("data_converter=info".parse()?))
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Convert(args) => {
            data_converter::cli::convert::execute(args)?;
        }
    }

    Ok(())
}

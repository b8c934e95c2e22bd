//! Conversion driver
//!
//! Orchestrates a full conversion run: validate the configured directories,
//! enumerate the source files, and push each file through symbol resolution,
//! line parsing, and batch collection into the canonical writer.

mod batch;
mod driver;

pub use batch::FileBatch;
pub use driver::{enumerate_source_files, run, ConversionJob};

use std::path::PathBuf;

use thiserror::Error;

use market_common::storage::StorageError;

use crate::provider::nse::ParseError;

/// Conversion errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// Operator-supplied configuration is unusable; nothing was converted
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A source file failed to parse; the run stops rather than coerce data
    #[error("Failed to convert {path:?}: {source}")]
    File {
        path: PathBuf,
        source: ParseError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

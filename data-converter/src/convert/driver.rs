//! Conversion run driver
//!
//! A run moves through three stages: validate the configured directories,
//! enumerate the source files, then convert each file in order. Validation
//! failures stop the run before any file is touched; a hard parse failure in
//! any file stops the whole run, since this is an offline, operator-
//! supervised tool and stopping beats writing corrupted price data.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use tracing::info;

use market_common::data::Resolution;
use market_common::storage::BarWriter;

use super::{ConvertError, FileBatch};
use crate::provider::nse::{open_bar_file, resolve_instrument};

/// State for one conversion run.
///
/// Created when the run starts, mutated only by the driver, discarded at run
/// end. The counters live here rather than in module state so a run is fully
/// self-contained.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Directory of vendor source files
    pub source_dir: PathBuf,
    /// Engine data root the canonical files are written under
    pub destination_dir: PathBuf,
    /// Target bar resolution
    pub resolution: Resolution,
    /// Files converted so far
    pub processed: usize,
    /// Total files enumerated for this run
    pub total: usize,
}

impl ConversionJob {
    /// Create a new job; counters start at zero
    pub fn new(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        resolution: Resolution,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            resolution,
            processed: 0,
            total: 0,
        }
    }

    /// Validate the operator-supplied directories.
    ///
    /// Both must be non-blank and exist on disk. Any violation is fatal and
    /// reported before any conversion work begins.
    pub fn validate(&self) -> Result<(), ConvertError> {
        validate_directory("source", &self.source_dir)?;
        validate_directory("destination", &self.destination_dir)?;
        Ok(())
    }
}

fn validate_directory(role: &str, dir: &Path) -> Result<(), ConvertError> {
    if dir.to_string_lossy().trim().is_empty() {
        return Err(ConvertError::Configuration(format!(
            "{role} directory must not be blank"
        )));
    }
    if !dir.is_dir() {
        return Err(ConvertError::Configuration(format!(
            "{role} directory does not exist: {dir:?}"
        )));
    }
    Ok(())
}

/// Enumerate the files directly under the source directory.
///
/// Directories are not descended into. Entries are sorted by path so a run
/// converts files in the same order on every platform; `read_dir` order is
/// platform-dependent.
pub fn enumerate_source_files(source_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Execute a conversion run.
///
/// Each enumerated file is converted to completion, in order, before the
/// next starts: resolve the instrument from the filename, parse every line
/// into an ordered batch, then hand the batch to the writer in a single
/// call. The writer overwrites any prior canonical artifact for that
/// instrument/resolution; the driver does not check first.
pub fn run<W: BarWriter>(
    job: &mut ConversionJob,
    writer: &W,
    progress: Option<ProgressBar>,
) -> Result<(), ConvertError> {
    job.validate()?;

    let files = enumerate_source_files(&job.source_dir)?;
    job.total = files.len();
    info!("Processing {} files from {:?}", job.total, job.source_dir);

    if let Some(pb) = &progress {
        pb.set_length(job.total as u64);
    }

    for path in &files {
        convert_file(job, writer, path)?;
        job.processed += 1;
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    info!(
        "Converted {} of {} files into {:?}",
        job.processed, job.total, job.destination_dir
    );
    Ok(())
}

/// Convert one source file and write its batch
fn convert_file<W: BarWriter>(
    job: &ConversionJob,
    writer: &W,
    path: &Path,
) -> Result<(), ConvertError> {
    let instrument = resolve_instrument(path);
    info!("Converting {:?} -> {}", path, instrument);

    let records = open_bar_file(path).map_err(|source| ConvertError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let batch = FileBatch::collect(instrument, records).map_err(|source| ConvertError::File {
        path: path.to_path_buf(),
        source,
    })?;

    writer.write_bars(
        job.resolution,
        batch.instrument(),
        &job.destination_dir,
        batch.bars(),
    )?;
    Ok(())
}

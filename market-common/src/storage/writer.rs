//! Bar writer for the canonical on-disk layout
//!
//! Bars for one instrument/resolution live in a single CSV file at
//! `<root>/<asset_class>/<market>/<resolution>/<symbol>.csv`, one record per
//! line as `YYYYMMDD HH:MM,open,high,low,close,volume`. Writing replaces any
//! prior file for that instrument/resolution in full; there is no append
//! mode.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::data::{BarRecord, InstrumentId, Resolution};

/// Timestamp format used inside canonical bar files
const BAR_TIMESTAMP_FORMAT: &str = "%Y%m%d %H:%M";

/// Storage errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sink for ordered bar sequences.
///
/// Implementations persist the records under a resolution- and
/// instrument-keyed location beneath `destination_root`, fully overwriting
/// any prior content for that instrument/resolution. The input order is
/// preserved verbatim.
pub trait BarWriter {
    fn write_bars(
        &self,
        resolution: Resolution,
        instrument: &InstrumentId,
        destination_root: &Path,
        bars: &[BarRecord],
    ) -> Result<(), StorageError>;
}

/// Writer for the engine's canonical CSV layout.
pub struct CsvBarWriter;

impl CsvBarWriter {
    /// Canonical file path for an instrument/resolution pair
    pub fn bar_path(
        resolution: Resolution,
        instrument: &InstrumentId,
        destination_root: &Path,
    ) -> PathBuf {
        destination_root
            .join(instrument.asset_class.as_str())
            .join(instrument.market.as_str())
            .join(resolution.as_str())
            .join(format!("{}.csv", instrument.symbol.to_lowercase()))
    }
}

impl BarWriter for CsvBarWriter {
    fn write_bars(
        &self,
        resolution: Resolution,
        instrument: &InstrumentId,
        destination_root: &Path,
        bars: &[BarRecord],
    ) -> Result<(), StorageError> {
        let path = Self::bar_path(resolution, instrument, destination_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // File::create truncates, so a rerun fully replaces prior content
        let mut out = BufWriter::new(File::create(&path)?);
        for bar in bars {
            writeln!(
                out,
                "{},{},{},{},{},{}",
                bar.timestamp.format(BAR_TIMESTAMP_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }
        out.flush()?;

        debug!("Wrote {} bars to {:?}", bars.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AssetClass, Market};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn nifty() -> InstrumentId {
        InstrumentId::new("NIFTY", AssetClass::Equity, Market::Usa)
    }

    fn bar(minute: u32) -> BarRecord {
        BarRecord::new(
            Utc.with_ymd_and_hms(2019, 2, 26, 9, minute, 0).unwrap(),
            dec!(10800.00),
            dec!(10810.50),
            dec!(10795.25),
            dec!(10805.75),
            0,
        )
    }

    #[test]
    fn test_bar_path_layout() {
        let path = CsvBarWriter::bar_path(Resolution::Minute, &nifty(), Path::new("/data"));
        assert_eq!(path, Path::new("/data/equity/usa/minute/nifty.csv"));
    }

    #[test]
    fn test_writes_ordered_records() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvBarWriter;

        writer
            .write_bars(
                Resolution::Minute,
                &nifty(),
                dir.path(),
                &[bar(15), bar(16)],
            )
            .unwrap();

        let path = CsvBarWriter::bar_path(Resolution::Minute, &nifty(), dir.path());
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "20190226 09:15,10800.00,10810.50,10795.25,10805.75,0\n\
             20190226 09:16,10800.00,10810.50,10795.25,10805.75,0\n"
        );
    }

    #[test]
    fn test_rewrite_replaces_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvBarWriter;

        writer
            .write_bars(
                Resolution::Minute,
                &nifty(),
                dir.path(),
                &[bar(15), bar(16), bar(17)],
            )
            .unwrap();
        writer
            .write_bars(Resolution::Minute, &nifty(), dir.path(), &[bar(30)])
            .unwrap();

        let path = CsvBarWriter::bar_path(Resolution::Minute, &nifty(), dir.path());
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "20190226 09:30,10800.00,10810.50,10795.25,10805.75,0\n"
        );
    }
}

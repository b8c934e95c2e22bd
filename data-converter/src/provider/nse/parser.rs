//! NSE intraday bar line parser
//!
//! Parses the vendor's fixed comma-separated layout:
//! `ignored,date,time,open,high,low,close[,volume]`. Lines with two or fewer
//! fields are blank/trailing noise and are skipped silently; anything else
//! either yields a validated bar record or is a hard failure. The parser
//! never substitutes values for malformed fields.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use market_common::data::BarRecord;

/// Fixed timestamp format the reconstructed date+time string must match
const TIMESTAMP_FORMAT: &str = "%Y%m%d %H%M%S%.f";

/// Errors during bar line parsing
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    #[error("Invalid line format: expected at least 7 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("Failed to parse timestamp '{0}': {1}")]
    InvalidTimestamp(String, String),

    #[error("Failed to parse {field} '{value}': {reason}")]
    InvalidPrice {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to parse volume '{0}': {1}")]
    InvalidVolume(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a single vendor line into a bar record.
///
/// Returns `Ok(None)` for skip-eligible lines (two or fewer fields after
/// splitting). Every other outcome is either exactly one record or a hard
/// failure for the line.
pub fn parse_line(line: &str) -> Result<Option<BarRecord>, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    // Blank lines and trailing newlines split into <= 2 fields; not an error
    if fields.len() <= 2 {
        return Ok(None);
    }

    if fields.len() < 7 {
        return Err(ParseError::InvalidFieldCount(fields.len()));
    }

    // Rebuild the timestamp as "<date> <time>" with a zero fractional
    // suffix so it matches the one fixed format
    let stamp = format!("{} {}.0000", fields[1], fields[2]);
    let timestamp = NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT)
        .map_err(|e| ParseError::InvalidTimestamp(stamp.clone(), e.to_string()))?
        .and_utc();

    let open = parse_price("open", fields[3])?;
    let high = parse_price("high", fields[4])?;
    let low = parse_price("low", fields[5])?;
    let close = parse_price("close", fields[6])?;

    // Volume is optional; absent volume means 0
    let volume = match fields.get(7) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ParseError::InvalidVolume((*raw).to_string(), e.to_string()))?,
        None => 0,
    };

    Ok(Some(BarRecord::new(
        timestamp, open, high, low, close, volume,
    )))
}

fn parse_price(field: &'static str, raw: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(raw).map_err(|e| ParseError::InvalidPrice {
        field,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Iterator over bar records in a vendor file or reader.
///
/// Skip-eligible lines are consumed without producing an item; a hard
/// failure is yielded as `Err` and the caller decides whether to abort.
pub struct BarLineIterator<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
}

impl<R: Read> BarLineIterator<R> {
    /// Create a new iterator from a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
        }
    }

    /// Get the current line number
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: Read> Iterator for BarLineIterator<R> {
    type Item = Result<BarRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;

                    match parse_line(line.trim_end_matches(['\r', '\n'])) {
                        Ok(Some(bar)) => return Some(Ok(bar)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                Err(e) => return Some(Err(ParseError::Io(e))),
            }
        }
    }
}

/// Open a vendor file and return an iterator over its bar records
pub fn open_bar_file(path: &Path) -> Result<BarLineIterator<std::fs::File>, ParseError> {
    let file = std::fs::File::open(path)?;
    Ok(BarLineIterator::new(file))
}

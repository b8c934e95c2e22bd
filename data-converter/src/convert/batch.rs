//! Per-file bar batch

use market_common::data::{BarRecord, InstrumentId};
use tracing::warn;

use crate::provider::nse::ParseError;

/// Ordered bar records for exactly one source file.
///
/// Preserves input line order verbatim: downstream canonical storage assumes
/// the vendor feed is already time-ordered, so an out-of-order record is a
/// data-quality condition to surface, not to silently re-sort.
#[derive(Debug)]
pub struct FileBatch {
    instrument: InstrumentId,
    bars: Vec<BarRecord>,
}

impl FileBatch {
    /// Create an empty batch for one instrument
    pub fn new(instrument: InstrumentId) -> Self {
        Self {
            instrument,
            bars: Vec::new(),
        }
    }

    /// Drain a parsed line stream into a batch, aborting on the first hard
    /// failure
    pub fn collect<I>(instrument: InstrumentId, records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<BarRecord, ParseError>>,
    {
        let mut batch = Self::new(instrument);
        for record in records {
            batch.push(record?);
        }
        Ok(batch)
    }

    /// Append a record, keeping input order
    pub fn push(&mut self, bar: BarRecord) {
        if let Some(prev) = self.bars.last() {
            if bar.timestamp < prev.timestamp {
                warn!(
                    "Out-of-order bar for {}: {} after {}",
                    self.instrument, bar.timestamp, prev.timestamp
                );
            }
        }
        self.bars.push(bar);
    }

    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    pub fn bars(&self) -> &[BarRecord] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

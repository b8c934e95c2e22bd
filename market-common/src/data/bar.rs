//! Canonical bar record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single OHLCV bar for one instrument.
///
/// This is the canonical representation of one fixed-interval aggregate of
/// price/volume activity. Bars are immutable once created; producers build
/// them from vendor data and hand them to a [`crate::storage::BarWriter`]
/// as an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarRecord {
    /// Bar timestamp (start of the period), minute precision
    pub timestamp: DateTime<Utc>,
    /// Open price
    pub open: Decimal,
    /// High price
    pub high: Decimal,
    /// Low price
    pub low: Decimal,
    /// Close price
    pub close: Decimal,
    /// Total volume traded; 0 when the source did not report volume
    pub volume: u64,
}

impl BarRecord {
    /// Create a new BarRecord
    pub fn new(
        timestamp: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

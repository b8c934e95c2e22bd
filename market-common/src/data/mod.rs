//! Canonical market data types
//!
//! These types represent the canonical format for time-series bar data in
//! the system. Vendor-specific data is normalized to these types before
//! storage.

mod bar;
mod instrument;
mod resolution;

pub use bar::*;
pub use instrument::*;
pub use resolution::*;

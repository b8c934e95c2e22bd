//! Vendor format support
//!
//! One module per supported vendor layout. Each vendor module knows how to
//! resolve instrument identity from its file naming convention and how to
//! parse its line format into canonical bar records.

pub mod nse;

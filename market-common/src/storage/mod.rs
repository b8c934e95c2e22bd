//! Canonical storage layout for bar data
//!
//! The engine reads time-series bars from a fixed directory layout under its
//! data root. This module owns that layout and the writer used to populate
//! it.

mod writer;

pub use writer::*;

//! Canonical instrument identity

use serde::{Deserialize, Serialize};

/// Security type of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equity,
    Index,
    Future,
}

impl AssetClass {
    /// Lowercase path segment used in the canonical storage layout
    pub const fn as_str(self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Index => "index",
            AssetClass::Future => "future",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market an instrument trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    Usa,
    India,
}

impl Market {
    /// Lowercase path segment used in the canonical storage layout
    pub const fn as_str(self) -> &'static str {
        match self {
            Market::Usa => "usa",
            Market::India => "india",
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical instrument identifier.
///
/// Derived once per source file and reused for every bar in that file's
/// batch. The symbol is the normalized ticker, not the raw vendor token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentId {
    /// Normalized ticker symbol
    pub symbol: String,
    /// Security type
    pub asset_class: AssetClass,
    /// Market identifier
    pub market: Market,
}

impl InstrumentId {
    /// Create a new InstrumentId
    pub fn new(symbol: impl Into<String>, asset_class: AssetClass, market: Market) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class,
            market,
        }
    }
}

impl std::fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}/{}", self.symbol, self.asset_class, self.market)
    }
}

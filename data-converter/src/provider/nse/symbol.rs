//! NSE symbol resolution
//!
//! Derives a canonical instrument identity from a vendor file path. The
//! trailing filename token is the raw instrument name; a small override
//! table maps long-form index names to their canonical short tickers.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use market_common::data::{AssetClass, InstrumentId, Market};

/// Mapping from long-form vendor tokens to canonical short tickers
static SYMBOL_OVERRIDES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("BANKNIFTY", "BNF")]));

/// Resolve the instrument identity for a vendor file.
///
/// Total over every path the driver can hand it: tokens without an override
/// pass through verbatim rather than failing, since a misclassified symbol
/// is recoverable after the run while an abort loses the whole batch.
///
/// # Examples
/// - "data/NIFTY.txt" -> NIFTY
/// - "data/BANKNIFTY.txt" -> BNF
/// - "data/NIFTY BANK.txt" -> BANK (vendor names embed spaces; the trailing
///   token wins)
pub fn resolve_instrument(path: &Path) -> InstrumentId {
    let token = raw_token(path);
    let symbol = SYMBOL_OVERRIDES
        .get(token.as_str())
        .map(|s| (*s).to_string())
        .unwrap_or(token);

    // Historical NSE dumps are registered under the engine's default market
    InstrumentId::new(symbol, AssetClass::Equity, Market::Usa)
}

/// Extract the raw instrument token from a file path.
///
/// Takes the trailing segment after splitting on directory separators and
/// whitespace, trims stray path punctuation, and strips the fixed `.txt`
/// extension.
fn raw_token(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let tail = raw
        .rsplit(['/', '\\', ' '])
        .next()
        .unwrap_or_else(|| raw.as_ref());

    let trimmed = tail.trim_matches(['.', '/', '\\']);
    let stripped = trimmed
        .strip_suffix(".txt")
        .or_else(|| trimmed.strip_suffix(".TXT"))
        .unwrap_or(trimmed);

    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_plain_filename() {
        let id = resolve_instrument(Path::new("/data/nse/NIFTY.txt"));
        assert_eq!(id.symbol, "NIFTY");
        assert_eq!(id.asset_class, AssetClass::Equity);
        assert_eq!(id.market, Market::Usa);
    }

    #[test]
    fn test_applies_override_table() {
        let id = resolve_instrument(Path::new("/data/nse/BANKNIFTY.txt"));
        assert_eq!(id.symbol, "BNF");
    }

    #[test]
    fn test_trailing_whitespace_token_wins() {
        // Vendor filenames sometimes embed spaces; only the last token counts
        let id = resolve_instrument(Path::new("/data/NIFTY BANK.txt"));
        assert_eq!(id.symbol, "BANK");
    }

    #[test]
    fn test_strips_uppercase_extension() {
        let id = resolve_instrument(Path::new("NIFTY.TXT"));
        assert_eq!(id.symbol, "NIFTY");
    }

    #[test]
    fn test_windows_separators() {
        let id = resolve_instrument(Path::new(r"C:\data\BANKNIFTY.txt"));
        assert_eq!(id.symbol, "BNF");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let id = resolve_instrument(Path::new("/data/FINNIFTY50.txt"));
        assert_eq!(id.symbol, "FINNIFTY50");
    }

    #[test]
    fn test_never_fails_on_odd_paths() {
        // No extension, no separators; the resolver still yields something
        let id = resolve_instrument(Path::new("weird"));
        assert_eq!(id.symbol, "weird");
    }
}

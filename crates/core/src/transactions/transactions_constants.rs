/// Transaction types
///
/// A ledger entry is either an acquisition or a disposal of a crypto asset.

/// Acquisition of an asset. Counts towards cost of buys and quantity bought.
pub const TRANSACTION_TYPE_BUY: &str = "BUY";

/// Disposal of an asset. Counts towards proceeds from sells.
pub const TRANSACTION_TYPE_SELL: &str = "SELL";

/// Display name used when a transaction points at a wallet that no longer exists.
pub const UNKNOWN_WALLET_NAME: &str = "Unknown Wallet";

/// Normalizes an asset symbol the way it is stored: trimmed and upper-cased.
pub fn normalize_asset_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

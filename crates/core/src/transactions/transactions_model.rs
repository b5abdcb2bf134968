//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::transactions_constants::*;
use crate::{errors::ValidationError, Error, Result};

/// Side of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => TRANSACTION_TYPE_BUY,
            TransactionType::Sell => TRANSACTION_TYPE_SELL,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a transaction type, ignoring case and surrounding whitespace.
impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(TRANSACTION_TYPE_BUY) {
            Ok(TransactionType::Buy)
        } else if trimmed.eq_ignore_ascii_case(TRANSACTION_TYPE_SELL) {
            Ok(TransactionType::Sell)
        } else {
            Err(format!("Unknown transaction type: {}", s))
        }
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Domain model representing a recorded buy or sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Asset symbol, e.g. `BTC`
    #[serde(alias = "crypto")]
    pub asset: String,
    pub quantity: Decimal,
    /// Unit price at the time of the transaction
    pub price: Decimal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn is_buy(&self) -> bool {
        self.transaction_type == TransactionType::Buy
    }

    pub fn is_sell(&self) -> bool {
        self.transaction_type == TransactionType::Sell
    }

    /// `price × quantity`, saturating at the bounds of `Decimal`.
    pub fn total_value(&self) -> Decimal {
        self.price.saturating_mul(self.quantity)
    }

    /// True when this transaction belongs to the given wallet/asset pair.
    pub fn matches(&self, wallet_id: &str, asset: &str) -> bool {
        self.wallet_id == wallet_id && self.asset == asset
    }
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub asset: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        validate_trade(&self.wallet_id, &self.asset, self.quantity, self.price)
    }

    /// Returns a copy with the asset symbol and wallet id normalized.
    pub fn normalized(mut self) -> Self {
        self.asset = normalize_asset_symbol(&self.asset);
        self.wallet_id = self.wallet_id.trim().to_string();
        self
    }
}

/// Input model for editing an existing transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub asset: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl TransactionUpdate {
    /// Validates the transaction update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction ID is required for updates".to_string(),
            )));
        }
        validate_trade(&self.wallet_id, &self.asset, self.quantity, self.price)
    }

    /// Returns a copy with the asset symbol and wallet id normalized.
    pub fn normalized(mut self) -> Self {
        self.asset = normalize_asset_symbol(&self.asset);
        self.wallet_id = self.wallet_id.trim().to_string();
        self
    }
}

impl From<Transaction> for TransactionUpdate {
    fn from(transaction: Transaction) -> Self {
        TransactionUpdate {
            id: transaction.id,
            wallet_id: transaction.wallet_id,
            transaction_type: transaction.transaction_type,
            asset: transaction.asset,
            quantity: transaction.quantity,
            price: transaction.price,
            timestamp: transaction.timestamp,
        }
    }
}

fn validate_trade(wallet_id: &str, asset: &str, quantity: Decimal, price: Decimal) -> Result<()> {
    if wallet_id.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "walletId".to_string(),
        )));
    }
    if asset.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Asset symbol cannot be empty".to_string(),
        )));
    }
    if quantity <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Quantity must be greater than zero, got {}",
            quantity
        ))));
    }
    if price <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Price must be greater than zero, got {}",
            price
        ))));
    }
    Ok(())
}

/// A transaction paired with the display name of its wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListItem {
    pub transaction: Transaction,
    pub wallet_name: String,
}

/// Sorts transactions newest first. Ties are broken by id so the order is stable
/// across store reads.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Pairs each transaction with its wallet's name, falling back to
/// [`UNKNOWN_WALLET_NAME`] for dangling wallet references.
pub fn attach_wallet_names(
    transactions: Vec<Transaction>,
    wallets: &[crate::wallets::Wallet],
) -> Vec<TransactionListItem> {
    transactions
        .into_iter()
        .map(|transaction| {
            let wallet_name = wallets
                .iter()
                .find(|w| w.id == transaction.wallet_id)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| UNKNOWN_WALLET_NAME.to_string());
            TransactionListItem {
                transaction,
                wallet_name,
            }
        })
        .collect()
}

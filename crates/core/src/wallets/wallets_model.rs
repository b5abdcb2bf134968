//! Wallet domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transactions::normalize_asset_symbol;
use crate::{errors::ValidationError, Error, Result};

/// Asset symbol to current quantity, ordered by symbol.
pub type CryptoHoldings = BTreeMap<String, Decimal>;

/// Domain model representing a wallet.
///
/// `crypto_holdings` is the authoritative current balance per asset. It is
/// stored alongside the ledger, not derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub crypto_holdings: CryptoHoldings,
}

impl Wallet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            crypto_holdings: CryptoHoldings::new(),
        }
    }

    /// Builder-style helper that sets the balance of one asset.
    pub fn with_holding(mut self, asset: impl Into<String>, quantity: Decimal) -> Self {
        self.crypto_holdings.insert(asset.into(), quantity);
        self
    }

    /// Current stored quantity of an asset, zero when the wallet has no entry.
    pub fn quantity_of(&self, asset: &str) -> Decimal {
        self.crypto_holdings
            .get(asset)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Input model for creating a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub crypto_holdings: CryptoHoldings,
}

impl NewWallet {
    /// Validates the new wallet data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_holdings(&self.crypto_holdings)
    }

    /// Returns a copy with a trimmed name and normalized asset symbols.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.crypto_holdings = normalize_holdings(self.crypto_holdings);
        self
    }
}

/// Input model for updating an existing wallet.
///
/// `crypto_holdings` is left untouched by the store when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUpdate {
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crypto_holdings: Option<CryptoHoldings>,
}

impl WalletUpdate {
    /// Validates the wallet update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet ID is required for updates".to_string(),
            )));
        }
        validate_name(&self.name)?;
        match &self.crypto_holdings {
            Some(holdings) => validate_holdings(holdings),
            None => Ok(()),
        }
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.crypto_holdings = self.crypto_holdings.map(normalize_holdings);
        self
    }
}

impl From<Wallet> for WalletUpdate {
    fn from(wallet: Wallet) -> Self {
        WalletUpdate {
            id: Some(wallet.id),
            name: wallet.name,
            crypto_holdings: Some(wallet.crypto_holdings),
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wallet name cannot be empty".to_string(),
        )));
    }
    Ok(())
}

fn validate_holdings(holdings: &CryptoHoldings) -> Result<()> {
    if holdings.keys().any(|asset| asset.trim().is_empty()) {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Asset symbol cannot be empty".to_string(),
        )));
    }
    Ok(())
}

// Symbols that collapse onto the same normalized key keep the last quantity.
fn normalize_holdings(holdings: CryptoHoldings) -> CryptoHoldings {
    holdings
        .into_iter()
        .map(|(asset, quantity)| (normalize_asset_symbol(&asset), quantity))
        .collect()
}

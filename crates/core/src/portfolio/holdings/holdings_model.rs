use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wallets::Wallet;

/// Cost-basis view of one asset in one wallet.
///
/// Derived on every aggregation pass and never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedHolding {
    pub asset: String,
    /// Copied from the wallet's stored balance
    pub current_quantity: Decimal,
    /// Cost of buys minus proceeds of sells
    pub net_invested_value: Decimal,
    /// Cost of buys divided by quantity bought, zero without buys
    pub avg_buy_price: Decimal,
}

/// A wallet together with the holdings derived for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletHoldings {
    pub wallet: Wallet,
    pub holdings: Vec<ProcessedHolding>,
}

impl WalletHoldings {
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn holding(&self, asset: &str) -> Option<&ProcessedHolding> {
        self.holdings.iter().find(|h| h.asset == asset)
    }

    /// Sum of net invested value across the wallet's holdings.
    pub fn total_net_invested(&self) -> Decimal {
        self.holdings
            .iter()
            .fold(Decimal::ZERO, |acc, h| acc.saturating_add(h.net_invested_value))
    }
}

/// Running sums over the ledger of one wallet/asset pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostBasisTotals {
    pub total_cost_of_buys: Decimal,
    pub total_quantity_bought: Decimal,
    pub total_proceeds_from_sells: Decimal,
}

impl CostBasisTotals {
    pub fn net_invested_value(&self) -> Decimal {
        self.total_cost_of_buys
            .saturating_sub(self.total_proceeds_from_sells)
    }

    pub fn avg_buy_price(&self) -> Decimal {
        if self.total_quantity_bought <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.total_cost_of_buys
            .checked_div(self.total_quantity_bought)
            .unwrap_or(if self.total_cost_of_buys.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }
}

//! Holdings aggregation.
//!
//! Turns wallet and transaction snapshots into per-wallet cost-basis figures.
//! Every function here is pure and total: unknown wallets or assets in the
//! ledger are ignored, and no input makes it fail.

use log::trace;
use rust_decimal::Decimal;

use crate::portfolio::holdings::holdings_model::{CostBasisTotals, ProcessedHolding, WalletHoldings};
use crate::transactions::{Transaction, TransactionType};
use crate::wallets::Wallet;

/// Computes the holdings of every wallet, in wallet order.
///
/// Each wallet appears exactly once in the output, with an empty holdings
/// list when none of its balances is positive.
pub fn compute_holdings(wallets: &[Wallet], transactions: &[Transaction]) -> Vec<WalletHoldings> {
    wallets
        .iter()
        .map(|wallet| compute_wallet_holdings(wallet, transactions))
        .collect()
}

/// Computes the holdings of a single wallet.
///
/// Only assets whose stored quantity is strictly positive are reported; zero
/// and negative balances are dropped silently. Holdings come out ordered by
/// asset symbol.
pub fn compute_wallet_holdings(wallet: &Wallet, transactions: &[Transaction]) -> WalletHoldings {
    let holdings = wallet
        .crypto_holdings
        .iter()
        .filter(|(_, quantity)| **quantity > Decimal::ZERO)
        .map(|(asset, &current_quantity)| {
            let totals = cost_basis_for(&wallet.id, asset, transactions);
            trace!(
                "Wallet {} asset {}: cost {} / qty {} / proceeds {}",
                wallet.id,
                asset,
                totals.total_cost_of_buys,
                totals.total_quantity_bought,
                totals.total_proceeds_from_sells
            );
            ProcessedHolding {
                asset: asset.clone(),
                current_quantity,
                net_invested_value: totals.net_invested_value(),
                avg_buy_price: totals.avg_buy_price(),
            }
        })
        .collect();

    WalletHoldings {
        wallet: wallet.clone(),
        holdings,
    }
}

/// Sums buy cost, buy quantity and sell proceeds for one wallet/asset pair.
///
/// The result does not depend on the order of `transactions`.
pub fn cost_basis_for(wallet_id: &str, asset: &str, transactions: &[Transaction]) -> CostBasisTotals {
    transactions
        .iter()
        .filter(|tx| tx.matches(wallet_id, asset))
        .fold(CostBasisTotals::default(), |mut totals, tx| {
            let value = tx.total_value();
            match tx.transaction_type {
                TransactionType::Buy => {
                    totals.total_cost_of_buys = totals.total_cost_of_buys.saturating_add(value);
                    totals.total_quantity_bought =
                        totals.total_quantity_bought.saturating_add(tx.quantity);
                }
                TransactionType::Sell => {
                    totals.total_proceeds_from_sells =
                        totals.total_proceeds_from_sells.saturating_add(value);
                }
            }
            totals
        })
}

use log::debug;
use std::sync::Arc;

use super::holdings_calculator::{compute_holdings, compute_wallet_holdings};
use super::holdings_model::WalletHoldings;
use crate::errors::Result;
use crate::transactions::TransactionRepositoryTrait;
use crate::wallets::WalletRepositoryTrait;

pub trait HoldingsServiceTrait: Send + Sync {
    /// Reads current wallet and ledger snapshots and aggregates every wallet.
    fn get_wallet_holdings(&self) -> Result<Vec<WalletHoldings>>;

    /// Aggregates a single wallet against its own transactions.
    fn get_holdings_for_wallet(&self, wallet_id: &str) -> Result<WalletHoldings>;
}

pub struct HoldingsService {
    wallet_repository: Arc<dyn WalletRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(
        wallet_repository: Arc<dyn WalletRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            wallet_repository,
            transaction_repository,
        }
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn get_wallet_holdings(&self) -> Result<Vec<WalletHoldings>> {
        let wallets = self.wallet_repository.list()?;
        let transactions = self.transaction_repository.list()?;
        debug!(
            "Aggregating holdings for {} wallets over {} transactions",
            wallets.len(),
            transactions.len()
        );
        Ok(compute_holdings(&wallets, &transactions))
    }

    fn get_holdings_for_wallet(&self, wallet_id: &str) -> Result<WalletHoldings> {
        let wallet = self.wallet_repository.get_by_id(wallet_id)?;
        let transactions = self.transaction_repository.list_by_wallet_id(wallet_id)?;
        Ok(compute_wallet_holdings(&wallet, &transactions))
    }
}

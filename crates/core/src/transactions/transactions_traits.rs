//! Transaction store and service traits.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionListItem, TransactionUpdate};
use crate::errors::Result;
use crate::wallets::Wallet;

/// Contract for the external transaction store.
///
/// Implementations persist the ledger in whatever backend the application uses.
/// Reads are synchronous snapshots; writes may go over the network.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Returns every transaction visible to the current session.
    fn list(&self) -> Result<Vec<Transaction>>;

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;

    fn list_by_wallet_id(&self, wallet_id: &str) -> Result<Vec<Transaction>>;

    /// Stores a new transaction. The service always fills `id` and `timestamp`
    /// before calling this.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update(&self, transaction_update: TransactionUpdate) -> Result<Transaction>;

    /// Deletes a transaction and returns the removed record.
    async fn delete(&self, transaction_id: &str) -> Result<Transaction>;

    /// Deletes every transaction of a wallet.
    ///
    /// Returns the number of deleted records.
    async fn delete_by_wallet_id(&self, wallet_id: &str) -> Result<usize>;
}

/// Contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Lists all transactions, newest first.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;

    /// Lists all transactions newest first, each paired with its wallet's name.
    fn list_transactions_with_wallets(
        &self,
        wallets: &[Wallet],
    ) -> Result<Vec<TransactionListItem>>;

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn update_transaction(&self, transaction_update: TransactionUpdate)
        -> Result<Transaction>;

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction>;
}

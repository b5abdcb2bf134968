use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::transactions_model::*;
use super::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::events::{DomainEvent, DomainEventSink};
use crate::wallets::{Wallet, WalletRepositoryTrait};
use crate::Result;

/// Service for managing the transaction ledger
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    wallet_repository: Arc<dyn WalletRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl TransactionService {
    /// Creates a new TransactionService instance with injected dependencies
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        wallet_repository: Arc<dyn WalletRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            transaction_repository,
            wallet_repository,
            event_sink,
        }
    }

    /// Fails with `NotFound` when the wallet does not exist.
    fn ensure_wallet_exists(&self, wallet_id: &str) -> Result<Wallet> {
        self.wallet_repository.get_by_id(wallet_id)
    }

    fn emit_changed(&self, transaction: &Transaction) {
        self.event_sink.emit(DomainEvent::transactions_changed(
            vec![transaction.wallet_id.clone()],
            vec![transaction.id.clone()],
        ));
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let mut transactions = self.transaction_repository.list()?;
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_by_id(transaction_id)
    }

    fn list_transactions_with_wallets(
        &self,
        wallets: &[Wallet],
    ) -> Result<Vec<TransactionListItem>> {
        let transactions = self.list_transactions()?;
        Ok(attach_wallet_names(transactions, wallets))
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut new_transaction = new_transaction.normalized();
        new_transaction.validate()?;
        self.ensure_wallet_exists(&new_transaction.wallet_id)?;

        if new_transaction.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            new_transaction.id = Some(Uuid::new_v4().to_string());
        }
        if new_transaction.timestamp.is_none() {
            new_transaction.timestamp = Some(Utc::now());
        }

        debug!(
            "Creating {} transaction for wallet {}: {} {} @ {}",
            new_transaction.transaction_type,
            new_transaction.wallet_id,
            new_transaction.quantity,
            new_transaction.asset,
            new_transaction.price
        );

        let created = self.transaction_repository.create(new_transaction).await?;
        self.emit_changed(&created);
        Ok(created)
    }

    async fn update_transaction(
        &self,
        transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        let transaction_update = transaction_update.normalized();
        transaction_update.validate()?;
        self.ensure_wallet_exists(&transaction_update.wallet_id)?;

        let previous = self.transaction_repository.get_by_id(&transaction_update.id)?;
        let updated = self.transaction_repository.update(transaction_update).await?;

        let mut wallet_ids = vec![updated.wallet_id.clone()];
        if previous.wallet_id != updated.wallet_id {
            wallet_ids.push(previous.wallet_id);
        }
        self.event_sink.emit(DomainEvent::transactions_changed(
            wallet_ids,
            vec![updated.id.clone()],
        ));
        Ok(updated)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let deleted = self.transaction_repository.delete(transaction_id).await?;
        debug!(
            "Deleted transaction {} from wallet {}",
            deleted.id, deleted.wallet_id
        );
        self.emit_changed(&deleted);
        Ok(deleted)
    }
}

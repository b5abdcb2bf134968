use log::{debug, error};
use std::sync::Arc;
use uuid::Uuid;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate};
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};
use crate::transactions::TransactionRepositoryTrait;

/// Service for managing wallets
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(
        repository: Arc<dyn WalletRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        let mut new_wallet = new_wallet.normalized();
        new_wallet.validate()?;
        if new_wallet.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            new_wallet.id = Some(Uuid::new_v4().to_string());
        }
        debug!("Creating wallet '{}'", new_wallet.name);

        let wallet = self.repository.create(new_wallet).await?;
        self.event_sink
            .emit(DomainEvent::wallets_changed(vec![wallet.id.clone()]));
        Ok(wallet)
    }

    async fn update_wallet(&self, wallet_update: WalletUpdate) -> Result<Wallet> {
        let wallet_update = wallet_update.normalized();
        wallet_update.validate()?;

        let wallet = self.repository.update(wallet_update).await?;
        self.event_sink
            .emit(DomainEvent::wallets_changed(vec![wallet.id.clone()]));
        Ok(wallet)
    }

    async fn rename_wallet(&self, wallet_id: &str, new_name: &str) -> Result<Wallet> {
        self.update_wallet(WalletUpdate {
            id: Some(wallet_id.to_string()),
            name: new_name.to_string(),
            crypto_holdings: None,
        })
        .await
    }

    /// Transactions are removed before the wallet itself.
    async fn delete_wallet(&self, wallet_id: &str) -> Result<()> {
        // Surfaces NotFound before anything is removed.
        self.repository.get_by_id(wallet_id)?;

        let removed = self
            .transaction_repository
            .delete_by_wallet_id(wallet_id)
            .await
            .map_err(|e| {
                error!(
                    "Failed to delete transactions of wallet {}: {}. Wallet kept.",
                    wallet_id, e
                );
                e
            })?;
        debug!("Deleted {} transactions of wallet {}", removed, wallet_id);

        self.repository.delete(wallet_id).await?;

        let wallet_ids = vec![wallet_id.to_string()];
        self.event_sink.emit_batch(vec![
            DomainEvent::transactions_changed(wallet_ids.clone(), Vec::new()),
            DomainEvent::wallets_changed(wallet_ids),
        ]);
        Ok(())
    }

    fn get_wallet(&self, wallet_id: &str) -> Result<Wallet> {
        self.repository.get_by_id(wallet_id)
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>> {
        self.repository.list()
    }
}

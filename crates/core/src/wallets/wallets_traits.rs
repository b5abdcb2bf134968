//! Wallet store and service traits.
//!
//! These traits define the contract for wallet operations without any
//! backend-specific types, so the same services run against any store.

use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate};
use crate::errors::Result;

/// Trait defining the contract for the external wallet store.
///
/// Implementations handle persistence of wallet records. Deleting a wallet
/// here removes only the wallet; cascading to its transactions is the
/// service's job.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    /// Creates a new wallet. The service always fills `id` before calling this.
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Updates an existing wallet.
    async fn update(&self, wallet_update: WalletUpdate) -> Result<Wallet>;

    /// Deletes a wallet by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, wallet_id: &str) -> Result<usize>;

    /// Retrieves a wallet by its ID.
    fn get_by_id(&self, wallet_id: &str) -> Result<Wallet>;

    /// Lists every wallet visible to the current session.
    fn list(&self) -> Result<Vec<Wallet>>;
}

/// Trait defining the contract for wallet service operations.
///
/// The service layer handles validation and coordinates the wallet and
/// transaction stores.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Creates a new wallet with validation.
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Updates an existing wallet with validation.
    async fn update_wallet(&self, wallet_update: WalletUpdate) -> Result<Wallet>;

    /// Changes only the display name of a wallet.
    async fn rename_wallet(&self, wallet_id: &str, new_name: &str) -> Result<Wallet>;

    /// Deletes a wallet together with all of its transactions.
    async fn delete_wallet(&self, wallet_id: &str) -> Result<()>;

    /// Retrieves a wallet by ID.
    fn get_wallet(&self, wallet_id: &str) -> Result<Wallet>;

    /// Lists all wallets.
    fn list_wallets(&self) -> Result<Vec<Wallet>>;
}

//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// Consumers use them to reload wallet and transaction snapshots, which in
/// turn re-runs the holdings aggregation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Wallets were created, renamed, or deleted.
    WalletsChanged { wallet_ids: Vec<String> },

    /// Transactions were created, updated, or deleted.
    ///
    /// `transaction_ids` is empty when a whole wallet's ledger was removed.
    TransactionsChanged {
        wallet_ids: Vec<String>,
        transaction_ids: Vec<String>,
    },
}

impl DomainEvent {
    /// Creates a WalletsChanged event.
    pub fn wallets_changed(wallet_ids: Vec<String>) -> Self {
        Self::WalletsChanged { wallet_ids }
    }

    /// Creates a TransactionsChanged event.
    pub fn transactions_changed(wallet_ids: Vec<String>, transaction_ids: Vec<String>) -> Self {
        Self::TransactionsChanged {
            wallet_ids,
            transaction_ids,
        }
    }

    /// Wallets whose holdings view is stale after this event.
    pub fn affected_wallet_ids(&self) -> &[String] {
        match self {
            Self::WalletsChanged { wallet_ids } => wallet_ids,
            Self::TransactionsChanged { wallet_ids, .. } => wallet_ids,
        }
    }
}

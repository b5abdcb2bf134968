//! Transactions tab: the ledger newest first, with edit and delete actions.

use log::{debug, error};
use serde::Serialize;
use std::sync::Arc;

use cryptolog_core::settings::DisplaySettings;
use cryptolog_core::transactions::{Transaction, TransactionListItem, TransactionServiceTrait};
use cryptolog_core::wallets::Wallet;

use crate::format::{format_fiat, format_quantity, format_timestamp};
use crate::notice::{Notice, TRANSACTIONS_LOAD_FAILED, TRANSACTION_DELETE_FAILED};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransactionDialog {
    #[default]
    None,
    Deleting(Transaction),
}

/// One formatted line of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub item: TransactionListItem,
    /// `BUY` or `SELL`
    pub type_label: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
    pub date: String,
}

pub struct TransactionsScreen {
    transaction_service: Arc<dyn TransactionServiceTrait>,
    settings: DisplaySettings,
    dialog: TransactionDialog,
}

impl TransactionsScreen {
    pub fn new(
        transaction_service: Arc<dyn TransactionServiceTrait>,
        settings: DisplaySettings,
    ) -> Self {
        Self {
            transaction_service,
            settings,
            dialog: TransactionDialog::None,
        }
    }

    pub fn dialog(&self) -> &TransactionDialog {
        &self.dialog
    }

    /// Loads the ledger newest first and formats one row per transaction.
    /// Wallet names are resolved against `wallets`.
    pub fn rows(&self, wallets: &[Wallet]) -> Result<Vec<TransactionRow>, Notice> {
        let items = self
            .transaction_service
            .list_transactions_with_wallets(wallets)
            .map_err(|e| {
                error!("Failed to load transactions: {}", e);
                Notice::error(TRANSACTIONS_LOAD_FAILED)
            })?;
        Ok(items.into_iter().map(|item| self.row(item)).collect())
    }

    fn row(&self, item: TransactionListItem) -> TransactionRow {
        let transaction = &item.transaction;
        TransactionRow {
            type_label: transaction.transaction_type.to_string(),
            quantity: format_quantity(transaction.quantity, &self.settings),
            price: format_fiat(transaction.price, &self.settings),
            total: format_fiat(transaction.total_value(), &self.settings),
            date: format_timestamp(transaction.timestamp, &self.settings),
            item,
        }
    }

    /// Route to the transaction form prefilled with an existing transaction.
    pub fn edit_route(&self, transaction: &Transaction) -> Route {
        Route::edit_transaction(&transaction.id, &transaction.wallet_id)
    }

    pub fn request_delete(&mut self, transaction: Transaction) {
        self.dialog = TransactionDialog::Deleting(transaction);
    }

    pub fn dismiss(&mut self) {
        self.dialog = TransactionDialog::None;
    }

    /// Deletes the transaction awaiting confirmation. The dialog closes either way.
    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        let TransactionDialog::Deleting(transaction) = std::mem::take(&mut self.dialog) else {
            return None;
        };

        match self
            .transaction_service
            .delete_transaction(&transaction.id)
            .await
        {
            Ok(_) => {
                debug!("Deleted transaction {}", transaction.id);
                None
            }
            Err(e) => {
                error!("Failed to delete transaction {}: {}", transaction.id, e);
                Some(Notice::error(TRANSACTION_DELETE_FAILED))
            }
        }
    }
}

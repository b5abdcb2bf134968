//! Wallets tab: one card per wallet with its cost-basis holdings, plus the
//! rename and delete dialogs.

use log::{debug, error};
use serde::Serialize;
use std::sync::Arc;

use cryptolog_core::compute_holdings;
use cryptolog_core::settings::DisplaySettings;
use cryptolog_core::transactions::Transaction;
use cryptolog_core::wallets::{Wallet, WalletServiceTrait};
use cryptolog_core::{ProcessedHolding, WalletHoldings};

use crate::format::{format_fiat, format_quantity};
use crate::notice::{Notice, WALLET_DELETE_FAILED, WALLET_UPDATE_FAILED};

pub const NO_HOLDINGS_MESSAGE: &str = "No holdings yet.";

/// Which dialog, if any, is open on the wallets tab.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WalletDialog {
    #[default]
    None,
    Editing(Wallet),
    Deleting(Wallet),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub asset: String,
    pub quantity: String,
    pub net_invested: String,
    /// e.g. `Avg. Price: R$ 50.000,00`
    pub avg_price: String,
    #[serde(skip)]
    pub holding: ProcessedHolding,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCard {
    pub wallet: Wallet,
    pub holdings: Vec<HoldingRow>,
}

impl WalletCard {
    /// Text shown in place of the holdings list, if the list is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.holdings.is_empty().then_some(NO_HOLDINGS_MESSAGE)
    }
}

pub struct WalletsScreen {
    wallet_service: Arc<dyn WalletServiceTrait>,
    settings: DisplaySettings,
    dialog: WalletDialog,
}

impl WalletsScreen {
    pub fn new(wallet_service: Arc<dyn WalletServiceTrait>, settings: DisplaySettings) -> Self {
        Self {
            wallet_service,
            settings,
            dialog: WalletDialog::None,
        }
    }

    pub fn dialog(&self) -> &WalletDialog {
        &self.dialog
    }

    /// Aggregates the current snapshots into display cards, in wallet order.
    pub fn cards(&self, wallets: &[Wallet], transactions: &[Transaction]) -> Vec<WalletCard> {
        compute_holdings(wallets, transactions)
            .into_iter()
            .map(|wh| self.card(wh))
            .collect()
    }

    fn card(&self, wallet_holdings: WalletHoldings) -> WalletCard {
        let holdings = wallet_holdings
            .holdings
            .into_iter()
            .map(|holding| HoldingRow {
                asset: holding.asset.clone(),
                quantity: format_quantity(holding.current_quantity, &self.settings),
                net_invested: format_fiat(holding.net_invested_value, &self.settings),
                avg_price: format!(
                    "Avg. Price: {}",
                    format_fiat(holding.avg_buy_price, &self.settings)
                ),
                holding,
            })
            .collect();
        WalletCard {
            wallet: wallet_holdings.wallet,
            holdings,
        }
    }

    pub fn request_edit(&mut self, wallet: Wallet) {
        self.dialog = WalletDialog::Editing(wallet);
    }

    pub fn request_delete(&mut self, wallet: Wallet) {
        self.dialog = WalletDialog::Deleting(wallet);
    }

    pub fn dismiss(&mut self) {
        self.dialog = WalletDialog::None;
    }

    /// Renames the wallet being edited.
    ///
    /// A blank name is ignored and the dialog stays open. Otherwise the dialog
    /// closes whatever the outcome, and a failed write yields a notice.
    pub async fn confirm_edit(&mut self, new_name: &str) -> Option<Notice> {
        let WalletDialog::Editing(wallet) = &self.dialog else {
            return None;
        };
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return None;
        }
        let wallet_id = wallet.id.clone();
        self.dialog = WalletDialog::None;

        match self.wallet_service.rename_wallet(&wallet_id, new_name).await {
            Ok(_) => {
                debug!("Renamed wallet {}", wallet_id);
                None
            }
            Err(e) => {
                error!("Failed to rename wallet {}: {}", wallet_id, e);
                Some(Notice::error(WALLET_UPDATE_FAILED))
            }
        }
    }

    /// Deletes the wallet awaiting confirmation together with its transactions.
    pub async fn confirm_delete(&mut self) -> Option<Notice> {
        let WalletDialog::Deleting(wallet) = &self.dialog else {
            return None;
        };
        let wallet_id = wallet.id.clone();
        self.dialog = WalletDialog::None;

        match self.wallet_service.delete_wallet(&wallet_id).await {
            Ok(()) => {
                debug!("Deleted wallet {}", wallet_id);
                None
            }
            Err(e) => {
                error!("Failed to delete wallet {}: {}", wallet_id, e);
                Some(Notice::error(WALLET_DELETE_FAILED))
            }
        }
    }
}

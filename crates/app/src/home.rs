//! Home screen: tab selection, add-transaction entry point and sign-out.

use log::{debug, error};
use serde::Serialize;
use std::sync::Arc;

use cryptolog_core::auth::AuthGatewayTrait;

use crate::notice::{Notice, SIGN_OUT_FAILED};
use crate::routes::Route;

pub const HOME_TITLE: &str = "My Crypto Log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HomeTab {
    #[default]
    Wallets,
    Transactions,
}

impl HomeTab {
    pub const ALL: [HomeTab; 2] = [HomeTab::Wallets, HomeTab::Transactions];

    pub fn title(&self) -> &'static str {
        match self {
            HomeTab::Wallets => "Wallets",
            HomeTab::Transactions => "Transactions",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            HomeTab::Wallets => 0,
            HomeTab::Transactions => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

pub struct HomeScreen {
    selected_tab: HomeTab,
    auth: Arc<dyn AuthGatewayTrait>,
}

impl HomeScreen {
    pub fn new(auth: Arc<dyn AuthGatewayTrait>) -> Self {
        Self {
            selected_tab: HomeTab::default(),
            auth,
        }
    }

    pub fn title(&self) -> &'static str {
        HOME_TITLE
    }

    pub fn selected_tab(&self) -> HomeTab {
        self.selected_tab
    }

    pub fn select_tab(&mut self, tab: HomeTab) {
        self.selected_tab = tab;
    }

    /// The floating "add" action always opens an empty transaction form.
    pub fn add_transaction_route(&self) -> Route {
        Route::new_transaction()
    }

    /// Signs out and returns the login route. On failure the user stays on
    /// the home screen and gets a notice.
    pub async fn sign_out(&self) -> Result<Route, Notice> {
        match self.auth.sign_out().await {
            Ok(()) => {
                debug!("Signed out");
                Ok(Route::Login)
            }
            Err(e) => {
                error!("Sign out failed: {}", e);
                Err(Notice::error(SIGN_OUT_FAILED))
            }
        }
    }
}

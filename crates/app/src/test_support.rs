//! In-memory service doubles for screen tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use cryptolog_core::auth::{AuthGatewayTrait, Session};
use cryptolog_core::errors::{Error, Result};
use cryptolog_core::transactions::{
    attach_wallet_names, sort_newest_first, NewTransaction, Transaction, TransactionListItem,
    TransactionServiceTrait, TransactionUpdate,
};
use cryptolog_core::wallets::{NewWallet, Wallet, WalletServiceTrait, WalletUpdate};

fn unavailable() -> Error {
    Error::Repository("store unavailable".to_string())
}

// ============================================================================
// Wallet service
// ============================================================================

#[derive(Clone, Default)]
pub struct MockWalletService {
    wallets: Arc<Mutex<Vec<Wallet>>>,
    /// Ids passed to `delete_wallet`, successful or not
    pub delete_calls: Arc<Mutex<Vec<String>>>,
    pub rename_calls: Arc<Mutex<Vec<(String, String)>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockWalletService {
    pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
        Self {
            wallets: Arc::new(Mutex::new(wallets)),
            ..Self::default()
        }
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn failing(&self) -> bool {
        *self.fail.lock().unwrap()
    }
}

#[async_trait]
impl WalletServiceTrait for MockWalletService {
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        if self.failing() {
            return Err(unavailable());
        }
        let wallet = Wallet {
            id: new_wallet.id.unwrap_or_else(|| "generated".to_string()),
            name: new_wallet.name,
            crypto_holdings: new_wallet.crypto_holdings,
        };
        self.wallets.lock().unwrap().push(wallet.clone());
        Ok(wallet)
    }

    async fn update_wallet(&self, wallet_update: WalletUpdate) -> Result<Wallet> {
        let id = wallet_update.id.clone().unwrap_or_default();
        self.rename_wallet(&id, &wallet_update.name).await
    }

    async fn rename_wallet(&self, wallet_id: &str, new_name: &str) -> Result<Wallet> {
        self.rename_calls
            .lock()
            .unwrap()
            .push((wallet_id.to_string(), new_name.to_string()));
        if self.failing() {
            return Err(unavailable());
        }
        let mut wallets = self.wallets.lock().unwrap();
        let wallet = wallets
            .iter_mut()
            .find(|w| w.id == wallet_id)
            .ok_or_else(|| Error::NotFound(wallet_id.to_string()))?;
        wallet.name = new_name.trim().to_string();
        Ok(wallet.clone())
    }

    async fn delete_wallet(&self, wallet_id: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(wallet_id.to_string());
        if self.failing() {
            return Err(unavailable());
        }
        self.wallets.lock().unwrap().retain(|w| w.id != wallet_id);
        Ok(())
    }

    fn get_wallet(&self, wallet_id: &str) -> Result<Wallet> {
        self.wallets
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == wallet_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(wallet_id.to_string()))
    }

    fn list_wallets(&self) -> Result<Vec<Wallet>> {
        Ok(self.wallets.lock().unwrap().clone())
    }
}

// ============================================================================
// Transaction service
// ============================================================================

#[derive(Clone, Default)]
pub struct MockTransactionService {
    transactions: Arc<Mutex<Vec<Transaction>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockTransactionService {
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
            ..Self::default()
        }
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn ids(&self) -> Vec<String> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }

    fn failing(&self) -> bool {
        *self.fail.lock().unwrap()
    }
}

#[async_trait]
impl TransactionServiceTrait for MockTransactionService {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        if self.failing() {
            return Err(unavailable());
        }
        let mut transactions = self.transactions.lock().unwrap().clone();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(transaction_id.to_string()))
    }

    fn list_transactions_with_wallets(
        &self,
        wallets: &[Wallet],
    ) -> Result<Vec<TransactionListItem>> {
        Ok(attach_wallet_names(self.list_transactions()?, wallets))
    }

    async fn create_transaction(&self, _new_transaction: NewTransaction) -> Result<Transaction> {
        Err(Error::Unexpected("not used by screens".to_string()))
    }

    async fn update_transaction(
        &self,
        _transaction_update: TransactionUpdate,
    ) -> Result<Transaction> {
        Err(Error::Unexpected("not used by screens".to_string()))
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        if self.failing() {
            return Err(unavailable());
        }
        let mut transactions = self.transactions.lock().unwrap();
        let index = transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| Error::NotFound(transaction_id.to_string()))?;
        Ok(transactions.remove(index))
    }
}

// ============================================================================
// Auth gateway
// ============================================================================

#[derive(Clone, Default)]
pub struct MockAuthGateway {
    session: Arc<Mutex<Option<Session>>>,
    /// Accepted credentials as (email, password)
    accepted: Arc<Mutex<Option<(String, String)>>>,
    pub reset_requests: Arc<Mutex<Vec<String>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockAuthGateway {
    pub fn accepting(email: &str, password: &str) -> Self {
        let gateway = Self::default();
        *gateway.accepted.lock().unwrap() = Some((email.to_string(), password.to_string()));
        gateway
    }

    pub fn signed_in(user_id: &str) -> Self {
        let gateway = Self::default();
        *gateway.session.lock().unwrap() = Some(Session {
            user_id: user_id.to_string(),
            email: None,
        });
        gateway
    }

    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn failing(&self) -> bool {
        *self.fail.lock().unwrap()
    }
}

#[async_trait]
impl AuthGatewayTrait for MockAuthGateway {
    fn current_session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let accepted = self.accepted.lock().unwrap().clone();
        match accepted {
            Some((e, p)) if e == email && p == password => {
                let session = Session {
                    user_id: format!("user-{}", email),
                    email: Some(email.to_string()),
                };
                *self.session.lock().unwrap() = Some(session.clone());
                Ok(session)
            }
            _ => Err(Error::Auth("invalid credentials".to_string())),
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session> {
        *self.accepted.lock().unwrap() = Some((email.to_string(), password.to_string()));
        self.sign_in(email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        if self.failing() {
            return Err(Error::Auth("network down".to_string()));
        }
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.reset_requests.lock().unwrap().push(email.to_string());
        if self.failing() {
            return Err(Error::Auth("network down".to_string()));
        }
        Ok(())
    }
}

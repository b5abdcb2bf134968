//! In-memory stores shared by the unit tests.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

use crate::errors::{Error, Result};
use crate::transactions::{
    NewTransaction, Transaction, TransactionRepositoryTrait, TransactionType, TransactionUpdate,
};
use crate::wallets::{NewWallet, Wallet, WalletRepositoryTrait, WalletUpdate};

pub fn ts(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

pub fn tx(
    id: &str,
    wallet_id: &str,
    transaction_type: TransactionType,
    asset: &str,
    quantity: Decimal,
    price: Decimal,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        wallet_id: wallet_id.to_string(),
        transaction_type,
        asset: asset.to_string(),
        quantity,
        price,
        timestamp: ts(1_700_000_000_000),
    }
}

// --- Mock WalletRepository ---
#[derive(Clone, Default)]
pub struct MockWalletRepository {
    pub wallets: Arc<Mutex<Vec<Wallet>>>,
    pub fail_writes: Arc<Mutex<bool>>,
}

impl MockWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallets(wallets: Vec<Wallet>) -> Self {
        let repo = Self::new();
        *repo.wallets.lock().unwrap() = wallets;
        repo
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn list_len(&self) -> usize {
        self.wallets.lock().unwrap().len()
    }

    fn check_writes(&self) -> Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(Error::Repository("wallet store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl WalletRepositoryTrait for MockWalletRepository {
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet> {
        self.check_writes()?;
        let wallet = Wallet {
            id: new_wallet.id.expect("service assigns ids"),
            name: new_wallet.name,
            crypto_holdings: new_wallet.crypto_holdings,
        };
        self.wallets.lock().unwrap().push(wallet.clone());
        Ok(wallet)
    }

    async fn update(&self, wallet_update: WalletUpdate) -> Result<Wallet> {
        self.check_writes()?;
        let id = wallet_update.id.clone().unwrap_or_default();
        let mut wallets = self.wallets.lock().unwrap();
        let wallet = wallets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| Error::NotFound(format!("Wallet {}", id)))?;
        wallet.name = wallet_update.name;
        if let Some(holdings) = wallet_update.crypto_holdings {
            wallet.crypto_holdings = holdings;
        }
        Ok(wallet.clone())
    }

    async fn delete(&self, wallet_id: &str) -> Result<usize> {
        self.check_writes()?;
        let mut wallets = self.wallets.lock().unwrap();
        let before = wallets.len();
        wallets.retain(|w| w.id != wallet_id);
        Ok(before - wallets.len())
    }

    fn get_by_id(&self, wallet_id: &str) -> Result<Wallet> {
        self.wallets
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == wallet_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Wallet {}", wallet_id)))
    }

    fn list(&self) -> Result<Vec<Wallet>> {
        Ok(self.wallets.lock().unwrap().clone())
    }
}

// --- Mock TransactionRepository ---
#[derive(Clone, Default)]
pub struct MockTransactionRepository {
    pub transactions: Arc<Mutex<Vec<Transaction>>>,
    pub fail_writes: Arc<Mutex<bool>>,
}

impl MockTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let repo = Self::new();
        *repo.transactions.lock().unwrap() = transactions;
        repo
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }

    fn check_writes(&self) -> Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(Error::Repository("transaction store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MockTransactionRepository {
    fn list(&self) -> Result<Vec<Transaction>> {
        Ok(self.snapshot())
    }

    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == transaction_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_id)))
    }

    fn list_by_wallet_id(&self, wallet_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|t| t.wallet_id == wallet_id)
            .collect())
    }

    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.check_writes()?;
        let transaction = Transaction {
            id: new_transaction.id.expect("service assigns ids"),
            wallet_id: new_transaction.wallet_id,
            transaction_type: new_transaction.transaction_type,
            asset: new_transaction.asset,
            quantity: new_transaction.quantity,
            price: new_transaction.price,
            timestamp: new_transaction.timestamp.expect("service assigns timestamps"),
        };
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn update(&self, transaction_update: TransactionUpdate) -> Result<Transaction> {
        self.check_writes()?;
        let mut transactions = self.transactions.lock().unwrap();
        let existing = transactions
            .iter_mut()
            .find(|t| t.id == transaction_update.id)
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_update.id)))?;
        *existing = Transaction {
            id: transaction_update.id,
            wallet_id: transaction_update.wallet_id,
            transaction_type: transaction_update.transaction_type,
            asset: transaction_update.asset,
            quantity: transaction_update.quantity,
            price: transaction_update.price,
            timestamp: transaction_update.timestamp,
        };
        Ok(existing.clone())
    }

    async fn delete(&self, transaction_id: &str) -> Result<Transaction> {
        self.check_writes()?;
        let mut transactions = self.transactions.lock().unwrap();
        let index = transactions
            .iter()
            .position(|t| t.id == transaction_id)
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", transaction_id)))?;
        Ok(transactions.remove(index))
    }

    async fn delete_by_wallet_id(&self, wallet_id: &str) -> Result<usize> {
        self.check_writes()?;
        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| t.wallet_id != wallet_id);
        Ok(before - transactions.len())
    }
}

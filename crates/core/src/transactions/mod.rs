//! Transactions module - the buy/sell ledger, its store contract and service.

mod transactions_constants;
mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use transactions_constants::*;
pub use transactions_model::{
    attach_wallet_names, sort_newest_first, NewTransaction, Transaction, TransactionListItem,
    TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};

//! MyCryptoLog Core - wallets, transactions, and holdings cost-basis.
//!
//! This crate holds the domain logic of the crypto log. It is backend-agnostic
//! and defines store traits that an external backend implements.

pub mod auth;
pub mod errors;
pub mod events;
pub mod portfolio;
pub mod settings;
pub mod transactions;
pub mod wallets;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the aggregation types
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Holdings module - per-wallet cost-basis aggregation.

mod holdings_calculator;
mod holdings_model;
mod holdings_service;



pub use holdings_calculator::{compute_holdings, compute_wallet_holdings, cost_basis_for};
pub use holdings_model::{CostBasisTotals, ProcessedHolding, WalletHoldings};
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};

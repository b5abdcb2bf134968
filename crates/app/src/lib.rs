//! MyCryptoLog App - screen state for a UI shell.
//!
//! Each screen owns its own state (selected tab, open dialog, form fields)
//! and talks to the domain only through the service traits of
//! `cryptolog-core`. Rendering is left to the shell.

pub mod format;
pub mod home;
pub mod login;
pub mod notice;
pub mod routes;
pub mod transactions_screen;
pub mod wallets_screen;

#[cfg(test)]
pub(crate) mod test_support;

pub use home::{HomeScreen, HomeTab};
pub use login::{LoginOutcome, LoginScreen};
pub use notice::Notice;
pub use routes::Route;
pub use transactions_screen::{TransactionDialog, TransactionRow, TransactionsScreen};
pub use wallets_screen::{HoldingRow, WalletCard, WalletDialog, WalletsScreen};

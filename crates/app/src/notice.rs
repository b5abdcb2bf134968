//! Transient user-facing messages.

use serde::Serialize;

pub const FILL_ALL_FIELDS: &str = "Please fill all fields.";
pub const LOGIN_FAILED: &str = "Login failed. Check credentials.";
pub const PASSWORD_RESET_SENT: &str = "Password reset email sent!";
pub const PASSWORD_RESET_FAILED: &str = "Failed to send email.";
pub const WALLET_UPDATE_FAILED: &str = "Failed to update wallet.";
pub const WALLET_DELETE_FAILED: &str = "Failed to delete wallet.";
pub const TRANSACTION_DELETE_FAILED: &str = "Failed to delete transaction.";
pub const TRANSACTIONS_LOAD_FAILED: &str = "Failed to load transactions.";
pub const SIGN_OUT_FAILED: &str = "Failed to sign out.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short message the shell shows once (a toast) and then forgets.
///
/// Showing a notice never changes domain state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

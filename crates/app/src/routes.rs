//! Navigation targets.

use serde::Serialize;

const LOGIN: &str = "login";
const SIGN_UP: &str = "signup";
const HOME: &str = "home";
const ADD_TRANSACTION: &str = "add_transaction";

/// A destination the shell can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "camelCase")]
pub enum Route {
    Login,
    SignUp,
    Home,
    /// Transaction form. Both ids set means editing an existing transaction.
    #[serde(rename_all = "camelCase")]
    AddTransaction {
        transaction_id: Option<String>,
        wallet_id: Option<String>,
    },
}

impl Route {
    pub fn new_transaction() -> Self {
        Route::AddTransaction {
            transaction_id: None,
            wallet_id: None,
        }
    }

    pub fn edit_transaction(transaction_id: &str, wallet_id: &str) -> Self {
        Route::AddTransaction {
            transaction_id: Some(transaction_id.to_string()),
            wallet_id: Some(wallet_id.to_string()),
        }
    }

    /// Path form, e.g. `add_transaction?transactionId=t1&walletId=w1`.
    pub fn path(&self) -> String {
        match self {
            Route::Login => LOGIN.to_string(),
            Route::SignUp => SIGN_UP.to_string(),
            Route::Home => HOME.to_string(),
            Route::AddTransaction {
                transaction_id,
                wallet_id,
            } => {
                let params: Vec<String> = [("transactionId", transaction_id), ("walletId", wallet_id)]
                    .into_iter()
                    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
                    .collect();
                if params.is_empty() {
                    ADD_TRANSACTION.to_string()
                } else {
                    format!("{}?{}", ADD_TRANSACTION, params.join("&"))
                }
            }
        }
    }

    /// Parses a path produced by [`Route::path`]. Unknown query keys are ignored
    /// and empty values count as absent.
    pub fn parse(path: &str) -> Option<Route> {
        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (path, None),
        };
        match base {
            LOGIN => Some(Route::Login),
            SIGN_UP => Some(Route::SignUp),
            HOME => Some(Route::Home),
            ADD_TRANSACTION => {
                let mut transaction_id = None;
                let mut wallet_id = None;
                for pair in query.unwrap_or_default().split('&') {
                    let Some((key, value)) = pair.split_once('=') else {
                        continue;
                    };
                    if value.is_empty() {
                        continue;
                    }
                    match key {
                        "transactionId" => transaction_id = Some(value.to_string()),
                        "walletId" => wallet_id = Some(value.to_string()),
                        _ => {}
                    }
                }
                Some(Route::AddTransaction {
                    transaction_id,
                    wallet_id,
                })
            }
            _ => None,
        }
    }
}

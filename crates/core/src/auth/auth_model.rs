use serde::{Deserialize, Serialize};

/// The signed-in user, as reported by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
}

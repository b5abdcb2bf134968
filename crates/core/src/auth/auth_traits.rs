use async_trait::async_trait;

use super::auth_model::Session;
use crate::errors::Result;

/// Contract for the external identity backend.
///
/// Credential failures are reported as `Error::Auth`.
#[async_trait]
pub trait AuthGatewayTrait: Send + Sync {
    /// The current session, if a user is signed in.
    fn current_session(&self) -> Option<Session>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session>;

    async fn sign_out(&self) -> Result<()>;

    async fn send_password_reset(&self, email: &str) -> Result<()>;
}

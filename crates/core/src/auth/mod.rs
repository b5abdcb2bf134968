//! Auth module - the session gateway contract.
//!
//! Authentication itself lives in an external identity backend. Wallet and
//! transaction stores are already scoped to the signed-in user, so nothing in
//! this crate depends on the session beyond this trait.

mod auth_model;
mod auth_traits;

pub use auth_model::Session;
pub use auth_traits::AuthGatewayTrait;

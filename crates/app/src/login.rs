//! Login form state.

use log::{debug, warn};
use std::sync::Arc;

use cryptolog_core::auth::AuthGatewayTrait;

use crate::notice::{
    Notice, FILL_ALL_FIELDS, LOGIN_FAILED, PASSWORD_RESET_FAILED, PASSWORD_RESET_SENT,
};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Route),
    Rejected(Notice),
}

pub struct LoginScreen {
    auth: Arc<dyn AuthGatewayTrait>,
    email: String,
    password: String,
    is_loading: bool,
    password_reset_open: bool,
}

impl LoginScreen {
    pub fn new(auth: Arc<dyn AuthGatewayTrait>) -> Self {
        Self {
            auth,
            email: String::new(),
            password: String::new(),
            is_loading: false,
            password_reset_open: false,
        }
    }

    /// Where to start: home when a session already exists.
    pub fn initial_route(&self) -> Route {
        if self.auth.current_session().is_some() {
            Route::Home
        } else {
            Route::Login
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// True while a sign-in request is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub async fn submit(&mut self) -> LoginOutcome {
        let email = self.email.trim().to_string();
        let password = self.password.trim().to_string();
        if email.is_empty() || password.is_empty() {
            return LoginOutcome::Rejected(Notice::error(FILL_ALL_FIELDS));
        }

        self.is_loading = true;
        let result = self.auth.sign_in(&email, &password).await;
        self.is_loading = false;

        match result {
            Ok(session) => {
                debug!("Signed in as {}", session.user_id);
                LoginOutcome::LoggedIn(Route::Home)
            }
            Err(e) => {
                warn!("Sign in failed: {}", e);
                LoginOutcome::Rejected(Notice::error(LOGIN_FAILED))
            }
        }
    }

    pub fn sign_up_route(&self) -> Route {
        Route::SignUp
    }

    pub fn is_password_reset_open(&self) -> bool {
        self.password_reset_open
    }

    pub fn open_password_reset(&mut self) {
        self.password_reset_open = true;
    }

    pub fn dismiss_password_reset(&mut self) {
        self.password_reset_open = false;
    }

    /// Sends a reset email and closes the dialog. A blank address is ignored
    /// and leaves the dialog open.
    pub async fn confirm_password_reset(&mut self, email: &str) -> Option<Notice> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        self.password_reset_open = false;

        match self.auth.send_password_reset(email).await {
            Ok(()) => Some(Notice::info(PASSWORD_RESET_SENT)),
            Err(e) => {
                warn!("Password reset failed: {}", e);
                Some(Notice::error(PASSWORD_RESET_FAILED))
            }
        }
    }
}

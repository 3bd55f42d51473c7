//! Login form state and its submission state machine.
//!
//! ```text
//! Idle -> Validating -> Rejected-Empty                      -> Idle
//!                    -> Sending -> Success-Redirected       -> Idle
//!                               -> Rejected-Server          -> Idle
//!                               -> Rejected-Network         -> Idle
//! ```
//!
//! `begin_submit` covers `Validating`, `finish` covers the return to `Idle`.
//! UI layers that cannot hold `&mut LoginForm` across an await call the two
//! halves around [`LoginClient::login`]; everything else uses
//! [`LoginForm::submit`].

use std::fmt;

use crate::credentials::Credentials;
use crate::error::LoginError;
use crate::flow::LoginClient;
use crate::navigate::Navigator;
use crate::storage::KeyValueStore;
use crate::transport::LoginTransport;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Please try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Terminal result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Token stored; the user was sent to this route.
    Redirected(String),
    /// The attempt ended with a user-visible error.
    Failed(LoginError),
    /// A request was already in flight; nothing happened.
    Ignored,
}

/// Input and UI state of the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Fixed user-facing message from the last failed attempt.
    pub error_message: Option<&'static str>,
    /// True while a login request is outstanding.
    pub is_loading: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission.
    ///
    /// Re-entrant calls while a request is in flight return
    /// `Err(SubmitOutcome::Ignored)` and leave the form unchanged. Otherwise
    /// the error is cleared and the fields validated; blank fields end the
    /// attempt with the validation message and no loading state.
    ///
    /// # Errors
    ///
    /// Returns the final [`SubmitOutcome`] when the attempt ends here.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitOutcome> {
        if self.is_loading {
            log::debug!("login already in flight; ignoring submit");
            return Err(SubmitOutcome::Ignored);
        }
        self.is_loading = true;
        self.error_message = None;

        match Credentials::new(self.username.as_str(), self.password.as_str()) {
            Ok(credentials) => Ok(credentials),
            Err(e) => {
                log::warn!("login not sent: {e}");
                Err(self.finish(Err(e)))
            }
        }
    }

    /// Record the result of the network half and return to idle.
    pub fn finish(&mut self, result: Result<String, LoginError>) -> SubmitOutcome {
        self.is_loading = false;
        match result {
            Ok(target) => SubmitOutcome::Redirected(target),
            Err(e) => {
                self.error_message = Some(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validate, send, and record one login attempt.
    pub async fn submit<T, S, N>(&mut self, client: &LoginClient<T, S, N>) -> SubmitOutcome
    where
        T: LoginTransport,
        S: KeyValueStore,
        N: Navigator,
    {
        let credentials = match self.begin_submit() {
            Ok(credentials) => credentials,
            Err(outcome) => return outcome,
        };
        let result = client.login(&credentials).await;
        self.finish(result)
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"[HIDDEN]")
            .field("error_message", &self.error_message)
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

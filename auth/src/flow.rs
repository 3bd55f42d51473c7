//! Network half of a login submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginClient` owns the injected transport, store and navigator. A
//! successful exchange writes the token, consumes the redirect target and
//! navigates; every other path leaves storage and location untouched.
//!
//! LOGGING
//! =======
//! Only the endpoint, status codes, a bounded excerpt of a rejection body and
//! the redirect target are logged. Credentials, the authorization header and
//! the issued token never reach a log record.

use crate::config::LoginConfig;
use crate::credentials::Credentials;
use crate::error::LoginError;
use crate::navigate::Navigator;
use crate::storage::{KeyValueStore, REDIRECT_AFTER_LOGIN_KEY, TOKEN_KEY, resolve_redirect_target};
use crate::transport::LoginTransport;

/// Longest slice of a rejection body kept in diagnostics.
const DIAGNOSTIC_BODY_CHARS: usize = 200;

/// Login capabilities bound to one configuration.
pub struct LoginClient<T, S, N> {
    config: LoginConfig,
    transport: T,
    store: S,
    navigator: N,
}

impl<T, S, N> LoginClient<T, S, N>
where
    T: LoginTransport,
    S: KeyValueStore,
    N: Navigator,
{
    #[must_use]
    pub fn new(config: LoginConfig, transport: T, store: S, navigator: N) -> Self {
        Self { config, transport, store, navigator }
    }

    #[must_use]
    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Exchange `credentials` for a session token and follow the redirect.
    ///
    /// Returns the route navigated to.
    ///
    /// # Errors
    ///
    /// - [`LoginError::InvalidCredentials`] for any non-2xx response.
    /// - [`LoginError::Network`] if the request or body read failed.
    /// - [`LoginError::Storage`] if the redirect target could not be read or
    ///   the token could not be written; nothing is stored and no navigation
    ///   happens in that case. Failing to clear the redirect key afterwards is
    ///   only logged.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, LoginError> {
        let endpoint = self.config.login_endpoint();
        log::info!("login attempt: endpoint={endpoint}");
        log::debug!("encoded credentials: [HIDDEN]");

        let response = self
            .transport
            .post_login(&endpoint, &credentials.authorization_header())
            .await
            .inspect_err(|e| log::error!("login request did not complete: {e}"))?;
        log::debug!("login response received: status={}", response.status);

        if !response.is_success() {
            log::warn!(
                "login rejected: status={} body={:?}",
                response.status,
                diagnostic_excerpt(&response.body)
            );
            return Err(LoginError::InvalidCredentials { status: response.status });
        }

        // The token write is the only mutation allowed to fail the attempt.
        let stored_redirect = self
            .store
            .get(REDIRECT_AFTER_LOGIN_KEY)
            .inspect_err(|e| log::error!("failed to read redirect target: {e}"))?;
        self.store
            .set(TOKEN_KEY, &response.body)
            .inspect_err(|e| log::error!("failed to persist session token: {e}"))?;
        if stored_redirect.is_some()
            && let Err(e) = self.store.remove(REDIRECT_AFTER_LOGIN_KEY)
        {
            log::warn!("failed to clear redirect target: {e}");
        }
        let target = resolve_redirect_target(stored_redirect);

        log::info!("login succeeded: redirecting to {target}");
        self.navigator.push(&target);
        Ok(target)
    }

    /// Navigate to the sign-up route. Touches no state.
    pub fn navigate_to_signup(&self) {
        self.navigator.push(self.config.signup_route());
    }
}

fn diagnostic_excerpt(body: &str) -> String {
    body.chars().take(DIAGNOSTIC_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

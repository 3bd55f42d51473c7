//! Username/password pair and its HTTP Basic encoding.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::LoginError;

/// Validated login credentials.
///
/// Construction rejects a username or password that is empty or only
/// whitespace. The stored values are kept exactly as typed, so a password with
/// leading or trailing spaces is encoded unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Validate and wrap a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingCredentials`] if either field is blank.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, LoginError> {
        let username = username.into();
        let password = password.into();
        if is_blank(&username) || is_blank(&password) {
            return Err(LoginError::MissingCredentials);
        }
        Ok(Self { username, password })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// `base64(username ":" password)` with the standard padded alphabet.
    #[must_use]
    pub fn basic_token(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    /// Value for the `Authorization` request header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.basic_token())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[HIDDEN]")
            .finish()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

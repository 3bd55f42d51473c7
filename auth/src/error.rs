//! Error types for the login flow.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is safe to log: none of these variants carry credentials,
//! the encoded authorization header, or response bodies. What the user sees is
//! decided separately by [`LoginError::user_message`].

use crate::form::{GENERIC_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE, MISSING_CREDENTIALS_MESSAGE};

/// Failure reported by a [`crate::KeyValueStore`] backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled, etc.).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected or failed an operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure reported by a [`crate::LoginTransport`] before a response was read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (DNS, connection reset, timeout).
    #[error("login request failed: {0}")]
    Request(String),
    /// A response arrived but its body could not be read.
    #[error("failed to read login response body: {0}")]
    Body(String),
}

/// Why a login attempt ended without a redirect.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("login rejected with status {status}")]
    InvalidCredentials { status: u16 },
    #[error(transparent)]
    Network(#[from] TransportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LoginError {
    /// Fixed, non-descriptive message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => MISSING_CREDENTIALS_MESSAGE,
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE,
            Self::Network(_) | Self::Storage(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

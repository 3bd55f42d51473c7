//! Platform-neutral username/password login flow.
//!
//! This crate owns everything the login form does that is not rendering:
//! credential validation, Basic-auth encoding, the `POST /do-login` exchange,
//! session token persistence and the post-login redirect. The browser client
//! and the CLI plug their own storage, transport and navigation in through the
//! traits re-exported here.
//!
//! DESIGN
//! ======
//! `LoginForm` is a plain state struct so UI layers can keep it inside a
//! reactive signal. `LoginClient` bundles the injected capabilities and runs
//! the network half of a submission.

pub mod config;
pub mod credentials;
pub mod error;
pub mod flow;
pub mod form;
pub mod navigate;
pub mod storage;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{DEFAULT_REDIRECT, LOGIN_PATH, LoginConfig, SIGNUP_ROUTE};
pub use credentials::Credentials;
pub use error::{LoginError, StorageError, TransportError};
pub use flow::LoginClient;
pub use form::{
    GENERIC_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LoginForm, MISSING_CREDENTIALS_MESSAGE, SubmitOutcome,
};
pub use navigate::Navigator;
pub use storage::{KeyValueStore, MemoryStore, REDIRECT_AFTER_LOGIN_KEY, TOKEN_KEY};
pub use transport::{CONTENT_TYPE_JSON, LoginResponse, LoginTransport};

//! Persistent key-value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage`; the CLI keeps a JSON file.
//! The login flow only ever touches the two keys defined here.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::config::DEFAULT_REDIRECT;
use crate::error::StorageError;

/// Key the session token is written under after a successful login.
pub const TOKEN_KEY: &str = "token";

/// Key another page writes before sending the user to login.
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-process store, used by tests and as a fallback when nothing durable exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { entries: Mutex::new(map) }
    }

    /// Copy of every entry currently stored.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

/// Route to navigate to after login, given the stored redirect value.
///
/// A missing or empty value resolves to [`DEFAULT_REDIRECT`].
#[must_use]
pub fn resolve_redirect_target(stored: Option<String>) -> String {
    stored
        .filter(|target| !target.is_empty())
        .unwrap_or_else(|| DEFAULT_REDIRECT.to_owned())
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

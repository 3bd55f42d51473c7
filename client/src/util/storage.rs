//! Browser `localStorage` behind the `auth` storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate builds talk to `window.localStorage` through `web-sys`. SSR builds
//! have no storage; every operation reports `StorageError::Unavailable`.

use auth::{KeyValueStore, StorageError};

/// [`KeyValueStore`] over the page's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn backend_error(op: &str, key: &str, error: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{op} `{key}`: {error:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| backend_error("get", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| backend_error("set", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| backend_error("remove", key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use thiserror::Error;
use web_sys::window;

pub const THEME_KEY: &str = "theme";
pub const CONSENT_KEY: &str = "cookieConsent";

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key {0}")]
    Write(String),
}

/// String flags that survive a page reload.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's per-origin `localStorage`.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(test)]
pub mod memory {
    use super::{KeyValueStore, StorageError};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Shared between "page loads" in tests to simulate a reload.
    #[derive(Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

//! Local Storage Adapter
//!
//! JSON values over a string key-value medium. `read` and `write` never
//! fail outward: problems are logged and the caller keeps its default or
//! in-memory value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dom::js_error_message;
use crate::error::StorageError;

/// Raw string key-value medium
pub trait KeyValueStore {
    /// Stored text for `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_error_message(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_error_message(&e),
        })
    }
}

/// Decode the value under `key`, propagating every failure
pub fn try_read<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode {
            key: key.to_string(),
            source,
        })
}

/// Encode and store `value` under `key`, propagating every failure
pub fn try_write<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &raw)
}

/// Value under `key`, or `default` if absent or unreadable
pub fn read<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str, default: T) -> T {
    match try_read(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            log::error!("{}; using default", e);
            default
        }
    }
}

/// Persist `value` under `key`; failures are logged and dropped
pub fn write<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) {
    if let Err(e) = try_write(store, key, value) {
        log::error!("{}; keeping in-memory state only", e);
    }
}

/// In-memory medium for tests, with switchable write failures
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    reject_writes: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail like a full quota
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.put_raw(key, value);
        Ok(())
    }
}

use common::{KeyValueStore, StorageError};
use web_sys::{window, Storage};

/// `KeyValueStore` over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self
            .storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".to_string()))?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove '{}' from localStorage: {:?}", key, e);
            }
        }
    }
}

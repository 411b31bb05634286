use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use common::{KeyValueStore, StorageError};
use tracing::{debug, error};

/// `KeyValueStore` persisted as a JSON object in a single file.
///
/// Every write rewrites the whole file. A missing file is an empty store; an
/// unreadable one is logged and treated as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        debug!("Opened session file {} ({} keys)", path.display(), entries.len());
        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), String> {
        let payload = serde_json::to_vec_pretty(&*self.entries.borrow()).map_err(|e| e.to_string())?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        fs::write(&self.path, payload).map_err(|e| e.to_string())
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse session file {}: {err}", path.display());
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read session file {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        self.persist().map_err(|reason| {
            let mut entries = self.entries.borrow_mut();
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            StorageError::Write {
                key: key.to_string(),
                reason,
            }
        })
    }

    fn remove(&self, key: &str) {
        if self.entries.borrow_mut().remove(key).is_none() {
            return;
        }
        if let Err(reason) = self.persist() {
            error!("failed to remove '{}' from {}: {}", key, self.path.display(), reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("ucu_store_{}_{}_{}.json", name, std::process::id(), nanos));
        path
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let store = FileStore::open(&path);
        store.set("token", "abc").unwrap();
        store.set("user", r#"{"username":"admin","role":"admin"}"#).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("abc"));
        assert!(reopened.get("user").unwrap().contains("admin"));

        reopened.remove("token");
        assert_eq!(FileStore::open(&path).get("token"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FileStore::open(temp_path("missing"));
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"not json").unwrap();
        let store = FileStore::open(&path);
        assert_eq!(store.get("token"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = temp_path("dir");
        fs::create_dir_all(&dir).unwrap();
        // The target is a directory, so the write fails.
        let store = FileStore::open(&dir);

        let err = store.set("token", "abc").unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "token"));
        assert_eq!(store.get("token"), None);
        let _ = fs::remove_dir_all(&dir);
    }
}

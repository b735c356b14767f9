//! Client-side session identity.
//!
//! The session remembers which team member is using the client. It is plain
//! state owned by the caller, persisted through whatever [`SessionStorage`]
//! the caller hands in.

use std::{collections::HashMap, fs, path::PathBuf, sync::Mutex};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Storage key holding the current user's id.
pub const CURRENT_USER_ID_KEY: &str = "currentUserId";

/// Key/value persistence for session state.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

fn poisoned() -> ClientError {
    ClientError::Storage("Session storage lock poisoned".into())
}

/// Process-local storage. Nothing survives the value being dropped.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|_| poisoned())?;
        items.remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Default)]
struct StoredItems {
    items: HashMap<String, String>,
}

/// Storage backed by a JSON file, rewritten on every change.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn with_items<F>(&self, op: F) -> Result<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        let mut items = self.load_locked()?;
        op(&mut items);
        self.persist_locked(items)
    }

    fn load_locked(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read(&self.path).map_err(|e| ClientError::Storage(e.to_string()))?;
        if raw.is_empty() {
            return Ok(HashMap::new());
        }

        let stored: StoredItems =
            serde_json::from_slice(&raw).map_err(|e| ClientError::Storage(e.to_string()))?;
        Ok(stored.items)
    }

    fn persist_locked(&self, items: HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ClientError::Storage(e.to_string()))?;
        }

        let serialized = serde_json::to_vec_pretty(&StoredItems { items })
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, serialized).map_err(|e| ClientError::Storage(e.to_string()))
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| poisoned())?;
        Ok(self.load_locked()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}

/// Which team member is acting through this client.
pub struct IdentitySession<S: SessionStorage> {
    storage: S,
    current_user_id: Option<i32>,
}

impl<S: SessionStorage> IdentitySession<S> {
    /// Restores the persisted identity, if any.
    ///
    /// A stored value that is not an id is ignored.
    pub fn new(storage: S) -> Result<Self> {
        let current_user_id = match storage.get_item(CURRENT_USER_ID_KEY)? {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Ignoring unreadable stored user id '{}'", raw);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            storage,
            current_user_id,
        })
    }

    pub fn current_user_id(&self) -> Option<i32> {
        self.current_user_id
    }

    /// Sets or clears the identity and persists the change.
    pub fn set_current_user(&mut self, user_id: Option<i32>) -> Result<()> {
        match user_id {
            Some(id) => self
                .storage
                .set_item(CURRENT_USER_ID_KEY, &id.to_string())?,
            None => self.storage.remove_item(CURRENT_USER_ID_KEY)?,
        }
        self.current_user_id = user_id;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_starts_empty_and_persists() {
        let mut session = IdentitySession::new(MemorySessionStorage::new()).unwrap();
        assert_eq!(session.current_user_id(), None);

        session.set_current_user(Some(3)).unwrap();
        assert_eq!(session.current_user_id(), Some(3));
        assert_eq!(
            session.storage().get_item(CURRENT_USER_ID_KEY).unwrap(),
            Some("3".to_string())
        );

        session.set_current_user(None).unwrap();
        assert_eq!(session.current_user_id(), None);
        assert_eq!(session.storage().get_item(CURRENT_USER_ID_KEY).unwrap(), None);
    }

    #[test]
    fn test_unreadable_stored_id_is_ignored() {
        let storage = MemorySessionStorage::new();
        storage.set_item(CURRENT_USER_ID_KEY, "alice").unwrap();
        let session = IdentitySession::new(storage).unwrap();
        assert_eq!(session.current_user_id(), None);
    }

    #[test]
    fn test_file_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").join("state.json");

        let mut session = IdentitySession::new(FileSessionStorage::new(&path)).unwrap();
        session.set_current_user(Some(5)).unwrap();
        drop(session);

        let mut reopened = IdentitySession::new(FileSessionStorage::new(&path)).unwrap();
        assert_eq!(reopened.current_user_id(), Some(5));

        reopened.set_current_user(None).unwrap();
        let cleared = IdentitySession::new(FileSessionStorage::new(&path)).unwrap();
        assert_eq!(cleared.current_user_id(), None);
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("state.json"));
        storage.set_item("theme", "dark").unwrap();
        storage.set_item(CURRENT_USER_ID_KEY, "2").unwrap();
        storage.remove_item(CURRENT_USER_ID_KEY).unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), Some("dark".to_string()));
    }
}

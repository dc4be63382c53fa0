use std::{cell::RefCell, collections::HashMap};

use gloo_storage::{LocalStorage, Storage};

use super::SessionError;

/// String key-value storage that survives page reloads.
pub trait KeyValueStore {
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Errors
    /// Returns [`SessionError::Storage`] when the backend refuses the write,
    /// for example when the quota is exhausted.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn get_item(&self, key: &str) -> Option<String>;

    /// Removes every entry, not just the ones written by the session store.
    fn clear(&self);
}

/// Browser local storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| SessionError::Storage(format!("{err:?}")))
    }

    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn clear(&self) {
        LocalStorage::clear();
    }
}

/// In-process storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_roundtrip() {
        let storage = BrowserStorage;
        storage.clear();
        storage.set_item("loggedLibraryUser", "{}").unwrap();
        assert_eq!(storage.get_item("loggedLibraryUser").as_deref(), Some("{}"));
        storage.clear();
        assert_eq!(storage.get_item("loggedLibraryUser"), None);
    }
}

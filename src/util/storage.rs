//! Durable key-value storage backing the credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` wraps `localStorage` behind the `csr` feature and no-ops
//! elsewhere, so session code runs unchanged in native tests. `MemoryStorage`
//! stands in for it when tests need entries to survive a "reload".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// String key-value storage that outlives the in-memory session.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Failures (private mode, quota) are logged and dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(any(test, feature = "csr"))]
fn write_failure(verb: &str, key: &str, error: &dyn std::fmt::Debug) -> String {
    format!("failed to {verb} {key}: {error:?}")
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("{}", write_failure("persist", key, &e));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not removed");
                return;
            };
            if let Err(e) = storage.remove_item(key) {
                log::warn!("{}", write_failure("remove", key, &e));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
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

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

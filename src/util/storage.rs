//! Browser localStorage access behind an injectable key-value interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session persistence is written against `KeyValueStore` so the session
//! logic can be exercised natively with an in-memory store while the
//! browser build talks to `window.localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; SSR paths safely
//! no-op so server rendering stays deterministic.

/// Minimal string key-value storage used for session persistence.
///
/// Writes are fire-and-forget: localStorage offers no useful error
/// recovery, so failures degrade to missing entries that the session
/// restore path already tolerates.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str);
    /// Remove the entry under `key`, if present.
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for native unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

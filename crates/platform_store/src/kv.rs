//! Key-value storage contracts and baseline adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`KvStore`] async methods.
pub type KvStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small persisted values (JSON or raw text stored per key).
pub trait KvStore {
    /// Loads the raw string stored under a key.
    fn load<'a>(&'a self, key: &'a str) -> KvStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw string under a key.
    fn save<'a>(&'a self, key: &'a str, raw: &'a str) -> KvStoreFuture<'a, Result<(), String>>;

    /// Deletes a key.
    fn delete<'a>(&'a self, key: &'a str) -> KvStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopKvStore;

impl KvStore for NoopKvStore {
    fn load<'a>(&'a self, _key: &'a str) -> KvStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save<'a>(&'a self, _key: &'a str, _raw: &'a str) -> KvStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete<'a>(&'a self, _key: &'a str) -> KvStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string.
pub struct MemoryKvStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKvStore {
    /// Reads a stored value without going through the async contract.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl KvStore for MemoryKvStore {
    fn load<'a>(&'a self, key: &'a str) -> KvStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save<'a>(&'a self, key: &'a str, raw: &'a str) -> KvStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw.to_string());
            Ok(())
        })
    }

    fn delete<'a>(&'a self, key: &'a str) -> KvStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed value through a [`KvStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_kv_with<S: KvStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`KvStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn save_kv_with<S: KvStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pref {
        collapsed: bool,
    }

    #[test]
    fn memory_store_round_trip_and_delete() {
        let store = MemoryKvStore::default();
        let store_obj: &dyn KvStore = &store;

        block_on(store_obj.save("ui.key", "{\"n\":1}")).expect("save");
        assert_eq!(
            block_on(store_obj.load("ui.key")).expect("load"),
            Some("{\"n\":1}".to_string())
        );
        block_on(store_obj.delete("ui.key")).expect("delete");
        assert_eq!(block_on(store_obj.load("ui.key")).expect("load"), None);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryKvStore::default();
        let store_obj: &dyn KvStore = &store;
        block_on(save_kv_with(store_obj, "sidebar", &Pref { collapsed: true }))
            .expect("save typed value");

        let loaded: Option<Pref> =
            block_on(load_kv_with(store_obj, "sidebar")).expect("load typed value");
        assert_eq!(loaded, Some(Pref { collapsed: true }));
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryKvStore::default();
        let store_obj: &dyn KvStore = &store;
        block_on(store_obj.save("sidebar", "{not json")).expect("save");

        let err = block_on(load_kv_with::<_, Pref>(store_obj, "sidebar"))
            .expect_err("expected decode failure");
        assert!(!err.is_empty());
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopKvStore;
        let store_obj: &dyn KvStore = &store;
        assert_eq!(block_on(store_obj.load("k")).expect("load"), None);
        block_on(store_obj.save("k", "{}")).expect("save");
        block_on(store_obj.delete("k")).expect("delete");
    }
}

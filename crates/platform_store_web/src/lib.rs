//! Browser `localStorage` / `sessionStorage` adapters for the [`platform_store`] contracts.
//!
//! Both adapters are intentionally small and synchronous at the browser API boundary, while
//! also implementing [`platform_store::KvStore`] (async trait) for compatibility with
//! higher-level consumers. Off wasm32 the adapters compile to inert no-ops so host-side
//! tests and tooling can link against them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use platform_store::{KvStore, KvStoreFuture};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

#[cfg(target_arch = "wasm32")]
impl StorageArea {
    const fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    fn resolve(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            Self::Local => window.local_storage().ok().flatten(),
            Self::Session => window.session_storage().ok().flatten(),
        }
    }
}

fn area_load(area: StorageArea, key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        area.resolve()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key);
        None
    }
}

fn area_save(area: StorageArea, key: &str, raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = area
            .resolve()
            .ok_or_else(|| format!("{} unavailable", area.label()))?;
        storage
            .set_item(key, raw)
            .map_err(|e| format!("{} set_item failed: {e:?}", area.label()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key, raw);
        Ok(())
    }
}

fn area_delete(area: StorageArea, key: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = area
            .resolve()
            .ok_or_else(|| format!("{} unavailable", area.label()))?;
        storage
            .remove_item(key)
            .map_err(|e| format!("{} remove_item failed: {e:?}", area.label()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key);
        Ok(())
    }
}

macro_rules! web_store {
    ($(#[$doc:meta])* $name:ident, $area:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            /// Loads the raw string stored under a key.
            pub fn load_raw(self, key: &str) -> Option<String> {
                area_load($area, key)
            }

            /// Saves a raw string under a key.
            ///
            /// # Errors
            ///
            /// Returns an error when the storage area is unavailable or the write fails.
            pub fn save_raw(self, key: &str, raw: &str) -> Result<(), String> {
                area_save($area, key, raw)
            }

            /// Deletes a key from the storage area.
            ///
            /// # Errors
            ///
            /// Returns an error when the storage area is unavailable or the delete fails.
            pub fn delete_raw(self, key: &str) -> Result<(), String> {
                area_delete($area, key)
            }

            /// Loads and deserializes a typed JSON value.
            pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
                let raw = self.load_raw(key)?;
                serde_json::from_str(&raw).ok()
            }

            /// Serializes and saves a typed JSON value.
            ///
            /// # Errors
            ///
            /// Returns an error when serialization or the storage write fails.
            pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
                let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
                self.save_raw(key, &raw)
            }
        }

        impl KvStore for $name {
            fn load<'a>(
                &'a self,
                key: &'a str,
            ) -> KvStoreFuture<'a, Result<Option<String>, String>> {
                let store = *self;
                Box::pin(async move { Ok(store.load_raw(key)) })
            }

            fn save<'a>(
                &'a self,
                key: &'a str,
                raw: &'a str,
            ) -> KvStoreFuture<'a, Result<(), String>> {
                let store = *self;
                Box::pin(async move { store.save_raw(key, raw) })
            }

            fn delete<'a>(&'a self, key: &'a str) -> KvStoreFuture<'a, Result<(), String>> {
                let store = *self;
                Box::pin(async move { store.delete_raw(key) })
            }
        }
    };
}

web_store!(
    /// Durable browser store backed by `window.localStorage`.
    WebLocalStore,
    StorageArea::Local
);

web_store!(
    /// Tab-scoped browser store backed by `window.sessionStorage`.
    WebSessionStore,
    StorageArea::Session
);

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    // Off wasm32 the adapters are inert; these tests pin the fallback contract the
    // host-side consumers rely on.

    #[test]
    fn local_store_fallback_is_empty_and_successful() {
        let store = WebLocalStore;
        let store_obj: &dyn KvStore = &store;
        assert_eq!(block_on(store_obj.load("token")).expect("load"), None);
        block_on(store_obj.save("token", "t")).expect("save");
        block_on(store_obj.delete("token")).expect("delete");
    }

    #[test]
    fn session_store_fallback_is_empty_and_successful() {
        let store = WebSessionStore;
        assert_eq!(store.load_typed::<u32>("counter"), None);
        store.save_typed("counter", &3_u32).expect("save");
        store.delete_raw("counter").expect("delete");
    }
}

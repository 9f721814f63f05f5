//! Persisted client UI-state store.
//!
//! Holds user identity, theme, locale, and a transient loading flag. The
//! durable subset `{user, theme, locale}` is written through the storage
//! contracts on every mutation as an explicit serialization allow-list
//! ([`PersistedState`]) and merged over the defaults at the next boot.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod context;
mod model;
mod persistence;
mod reducer;

pub use context::{use_app_state, AppStateContext, AppStateProvider};
pub use model::{
    AppState, PersistedState, Theme, UserProfile, DEFAULT_LOCALE, STATE_STORAGE_KEY,
};
pub use persistence::{load_snapshot, save_snapshot};
pub use reducer::{reduce_state, StateAction};

//! Durable snapshot load/save over the storage contracts.

use platform_store::{load_kv_with, save_kv_with, KvStore};

use crate::model::{PersistedState, STATE_STORAGE_KEY};

/// Loads the persisted snapshot, when one exists.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_snapshot<S: KvStore + ?Sized>(
    store: &S,
) -> Result<Option<PersistedState>, String> {
    load_kv_with(store, STATE_STORAGE_KEY).await
}

/// Writes the persisted snapshot.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn save_snapshot<S: KvStore + ?Sized>(
    store: &S,
    snapshot: &PersistedState,
) -> Result<(), String> {
    save_kv_with(store, STATE_STORAGE_KEY, snapshot).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_store::MemoryKvStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppState, Theme, UserProfile};
    use crate::reducer::{reduce_state, StateAction};

    fn sample_user() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "Example User".to_string(),
            email: "user@example.com".to_string(),
            avatar: Some("https://example.com/a.png".to_string()),
        }
    }

    #[test]
    fn snapshot_round_trips_through_the_store() {
        let store = MemoryKvStore::default();
        let snapshot = PersistedState {
            user: Some(sample_user()),
            theme: Theme::Dark,
            locale: "en-US".to_string(),
        };

        block_on(save_snapshot(&store, &snapshot)).expect("save");
        let loaded = block_on(load_snapshot(&store)).expect("load");
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn missing_snapshot_loads_as_none() {
        let store = MemoryKvStore::default();
        assert_eq!(block_on(load_snapshot(&store)).expect("load"), None);
    }

    // Simulates a fresh process start after each setter: the reloaded state
    // reproduces the persisted triple and never restores `loading`.
    #[test]
    fn every_setter_survives_a_reload_except_loading() {
        let store = MemoryKvStore::default();
        let mut state = AppState::default();

        let actions = [
            StateAction::SetUser(sample_user()),
            StateAction::SetTheme(Theme::Light),
            StateAction::SetLoading(true),
            StateAction::SetLocale("en-US".to_string()),
        ];
        for action in actions {
            reduce_state(&mut state, action);
            block_on(save_snapshot(&store, &PersistedState::from(&state))).expect("persist");

            let reloaded =
                AppState::hydrate(block_on(load_snapshot(&store)).expect("load"));
            assert_eq!(reloaded.user, state.user);
            assert_eq!(reloaded.theme, state.theme);
            assert_eq!(reloaded.locale, state.locale);
            assert!(!reloaded.loading);
        }
    }
}

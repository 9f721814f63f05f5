//! Leptos provider and context wiring for the UI-state store.

use std::rc::Rc;

use leptos::*;
use platform_store::KvStore;

use crate::model::{AppState, PersistedState, Theme, UserProfile};
use crate::persistence::save_snapshot;
use crate::reducer::{reduce_state, StateAction};

#[derive(Clone, Copy)]
/// Leptos context for reading the UI state and applying [`StateAction`] values.
///
/// Every mutation writes the durable `{user, theme, locale}` snapshot; the
/// transient `loading` flag is never part of it.
pub struct AppStateContext {
    /// Reactive UI state signal.
    pub state: RwSignal<AppState>,
    store: StoredValue<Rc<dyn KvStore>>,
}

impl AppStateContext {
    /// Applies an action and persists the durable subset.
    pub fn dispatch(&self, action: StateAction) {
        self.state.update(|state| reduce_state(state, action));
        self.persist();
    }

    /// Replaces the signed-in user.
    pub fn set_user(&self, user: UserProfile) {
        self.dispatch(StateAction::SetUser(user));
    }

    /// Clears the signed-in user.
    pub fn clear_user(&self) {
        self.dispatch(StateAction::ClearUser);
    }

    /// Replaces the theme preference.
    pub fn set_theme(&self, theme: Theme) {
        self.dispatch(StateAction::SetTheme(theme));
    }

    /// Replaces the transient loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(StateAction::SetLoading(loading));
    }

    /// Replaces the locale tag.
    pub fn set_locale(&self, locale: impl Into<String>) {
        self.dispatch(StateAction::SetLocale(locale.into()));
    }

    /// Restores all fields to their defaults.
    pub fn reset(&self) {
        self.dispatch(StateAction::Reset);
    }

    fn persist(&self) {
        let snapshot = PersistedState::from(&self.state.get_untracked());
        let store = self.store.get_value();
        spawn_local(async move {
            if let Err(err) = save_snapshot(store.as_ref(), &snapshot).await {
                logging::warn!("app state persist failed: {err}");
            }
        });
    }
}

#[component]
/// Provides [`AppStateContext`] to descendant components.
///
/// `initial` is the snapshot loaded from durable storage at boot; it is merged
/// over the defaults before any setter can run.
pub fn AppStateProvider(
    /// Durable store receiving the snapshot written on every mutation.
    store: Rc<dyn KvStore>,
    /// Persisted snapshot from a prior session, when one exists.
    initial: Option<PersistedState>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(AppState::hydrate(initial));
    let context = AppStateContext {
        state,
        store: store_value(store),
    };
    provide_context(context);
    children().into_view()
}

/// Returns the current [`AppStateContext`].
///
/// # Panics
///
/// Panics if called outside [`AppStateProvider`].
pub fn use_app_state() -> AppStateContext {
    use_context::<AppStateContext>().expect("AppStateContext not provided")
}

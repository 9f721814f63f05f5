//! State transitions for the UI-state store.

use crate::model::{AppState, Theme, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Mutation applied to the UI state. Each action is a single-field replace;
/// [`StateAction::Reset`] restores every field to its default.
pub enum StateAction {
    /// Replaces the signed-in user.
    SetUser(UserProfile),
    /// Clears the signed-in user.
    ClearUser,
    /// Replaces the theme preference.
    SetTheme(Theme),
    /// Replaces the transient loading flag.
    SetLoading(bool),
    /// Replaces the locale tag.
    SetLocale(String),
    /// Restores all fields to their defaults.
    Reset,
}

/// Applies an action to the state.
///
/// The durable snapshot is written after every action by the caller; this
/// function is the pure transition.
pub fn reduce_state(state: &mut AppState, action: StateAction) {
    match action {
        StateAction::SetUser(user) => state.user = Some(user),
        StateAction::ClearUser => state.user = None,
        StateAction::SetTheme(theme) => state.theme = theme,
        StateAction::SetLoading(loading) => state.loading = loading,
        StateAction::SetLocale(locale) => state.locale = locale,
        StateAction::Reset => *state = AppState::default(),
    }
}

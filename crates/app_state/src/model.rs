//! UI-state model and the persisted-subset allow-list.

use serde::{Deserialize, Serialize};

/// Storage key holding the serialized [`PersistedState`] snapshot.
pub const STATE_STORAGE_KEY: &str = "app-storage";

/// Default locale tag.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Signed-in user identity. Either fully populated or absent; there is no
/// partial user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Avatar URL, when one is set.
    pub avatar: Option<String>,
}

/// Color-scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
    /// Follow the platform preference.
    #[default]
    System,
}

impl Theme {
    /// All selectable themes, in display order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Returns a stable string token for DOM attributes and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

/// Full client UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Signed-in user, when any.
    pub user: Option<UserProfile>,
    /// Color-scheme preference.
    pub theme: Theme,
    /// Transient global loading flag. Never persisted.
    pub loading: bool,
    /// Locale tag.
    pub locale: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            theme: Theme::System,
            loading: false,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AppState {
    /// Rebuilds state from a persisted snapshot merged over the defaults.
    ///
    /// `loading` always starts `false`; it is intentionally not part of the
    /// snapshot.
    pub fn hydrate(snapshot: Option<PersistedState>) -> Self {
        match snapshot {
            Some(snapshot) => Self {
                user: snapshot.user,
                theme: snapshot.theme,
                loading: false,
                locale: snapshot.locale,
            },
            None => Self::default(),
        }
    }
}

/// The durable subset of [`AppState`], as an explicit serialization
/// allow-list rather than framework magic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Signed-in user, when any.
    pub user: Option<UserProfile>,
    /// Color-scheme preference.
    pub theme: Theme,
    /// Locale tag.
    pub locale: String,
}

impl From<&AppState> for PersistedState {
    fn from(state: &AppState) -> Self {
        Self {
            user: state.user.clone(),
            theme: state.theme,
            locale: state.locale.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "Example User".to_string(),
            email: "user@example.com".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn defaults_match_the_documented_baseline() {
        let state = AppState::default();
        assert_eq!(state.user, None);
        assert_eq!(state.theme, Theme::System);
        assert!(!state.loading);
        assert_eq!(state.locale, "zh-CN");
    }

    #[test]
    fn persisted_subset_excludes_the_loading_flag() {
        let state = AppState {
            user: Some(sample_user()),
            theme: Theme::Dark,
            loading: true,
            locale: "en-US".to_string(),
        };

        let snapshot = PersistedState::from(&state);
        let value = serde_json::to_value(&snapshot).expect("serialize snapshot");
        let object = value.as_object().expect("object");
        assert!(object.contains_key("user"));
        assert!(object.contains_key("theme"));
        assert!(object.contains_key("locale"));
        assert!(!object.contains_key("loading"));
    }

    #[test]
    fn hydrate_merges_the_snapshot_over_defaults() {
        let snapshot = PersistedState {
            user: Some(sample_user()),
            theme: Theme::Light,
            locale: "en-US".to_string(),
        };

        let state = AppState::hydrate(Some(snapshot.clone()));
        assert_eq!(state.user, snapshot.user);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.locale, "en-US");
        assert!(!state.loading);

        assert_eq!(AppState::hydrate(None), AppState::default());
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Theme::System).expect("serialize"),
            serde_json::json!("system")
        );
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}

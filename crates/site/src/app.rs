//! Application shell: provider wiring and route table.

use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use api_client::{PostsApi, UsersApi};
use app_state::{AppStateProvider, PersistedState, STATE_STORAGE_KEY};
use http_client::HttpClient;
use platform_store::KvStore;
use platform_store_web::{WebLocalStore, WebSessionStore};

use crate::error_boundary::AppErrorBoundary;
use crate::pages::{AboutPage, HomePage, NotFoundPage};

#[derive(Clone)]
/// Leptos context carrying the typed API facades.
pub struct ApiContext {
    /// Post endpoints.
    pub posts: PostsApi,
    /// User endpoints.
    pub users: UsersApi,
}

/// Returns the current [`ApiContext`].
///
/// # Panics
///
/// Panics if called outside [`App`].
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not provided")
}

#[component]
/// Application root: head manager, error boundary, state provider, and router.
pub fn App() -> impl IntoView {
    provide_meta_context();

    let local_store: Rc<dyn KvStore> = Rc::new(WebLocalStore);
    let session_store: Rc<dyn KvStore> = Rc::new(WebSessionStore);
    let initial = WebLocalStore.load_typed::<PersistedState>(STATE_STORAGE_KEY);
    let http = Rc::new(HttpClient::new(local_store.clone(), session_store));
    provide_context(ApiContext {
        posts: PostsApi::new(http.clone()),
        users: UsersApi::new(http),
    });

    view! {
        <Title text="Leptos H5 Template" />
        <Meta
            name="viewport"
            content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no"
        />

        <AppErrorBoundary>
            <AppStateProvider store=local_store.clone() initial=initial.clone()>
                <Router>
                    <main class="site-root">
                        <Routes>
                            <Route path="" view=HomePage />
                            <Route path="/about" view=AboutPage />
                            <Route path="/*any" view=NotFoundPage />
                        </Routes>
                    </main>
                </Router>
            </AppStateProvider>
        </AppErrorBoundary>
    }
}

//! Root composition for the browser application: providers, router, and pages.

mod app;
mod error_boundary;
mod pages;

pub use app::{use_api, ApiContext, App};
pub use error_boundary::AppErrorBoundary;
pub use pages::{AboutPage, HomePage, NotFoundPage};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the application onto `document.body`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <App /> })
}

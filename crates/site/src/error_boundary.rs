//! Render-scope guard around the page tree.

use leptos::*;
use system_ui::prelude::*;

#[component]
/// Contains render-time errors from descendants instead of propagating them.
///
/// Errors are logged and replaced by a fallback panel; the default panel
/// offers a user-triggered retry that clears the captured errors and
/// re-attempts rendering of the original children.
pub fn AppErrorBoundary(
    /// Replacement fallback view. When absent the default panel is shown.
    #[prop(optional)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let epoch = create_rw_signal(0u32);

    view! {
        <ErrorBoundary fallback=move |errors| {
            match fallback.clone() {
                Some(fallback) => fallback.run(),
                None => view! { <DefaultErrorFallback errors=errors epoch=epoch /> }.into_view(),
            }
        }>
            {move || {
                epoch.get();
                children()
            }}
        </ErrorBoundary>
    }
}

#[component]
fn DefaultErrorFallback(errors: RwSignal<Errors>, epoch: RwSignal<u32>) -> impl IntoView {
    create_effect(move |_| {
        for (_, error) in errors.get() {
            logging::error!("render error caught by boundary: {error}");
        }
    });

    let retry = Callback::new(move |_| {
        errors.set(Errors::default());
        epoch.update(|n| *n += 1);
    });

    view! {
        <EmptyState layout_class="site-error-fallback">
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading tone=TextTone::Danger>"Something went wrong"</Heading>
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| {
                            view! { <Text tone=TextTone::Secondary>{error.to_string()}</Text> }
                        })
                        .collect_view()
                }}
                <Button on_click=retry>"Retry"</Button>
            </Stack>
        </EmptyState>
    }
}

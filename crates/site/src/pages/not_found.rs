//! Catch-all page for unknown routes.

use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::A;

use system_ui::prelude::*;

#[component]
/// 404 page.
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="404 - Page not found" />
        <Meta name="description" content="Page not found" />

        <EmptyState layout_class="page page-not-found">
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading>"404"</Heading>
                <Text>"Page not found"</Text>
                <Text tone=TextTone::Secondary>
                    "The page you are looking for does not exist or has been removed."
                </Text>
                <A href="/">"Back to home"</A>
            </Stack>
        </EmptyState>
    }
}

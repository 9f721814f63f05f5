//! About page: static project overview.

use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::A;

use system_ui::prelude::*;

#[component]
/// Project overview page.
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Leptos H5 Template" />
        <Meta name="description" content="Project overview and stack" />

        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="page page-about">
            <Cluster justify=LayoutJustify::Between layout_class="site-nav">
                <Heading>"Leptos H5 Template"</Heading>
                <A href="/">"Back to home"</A>
            </Cluster>

            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading>"About the project"</Heading>
                <Text tone=TextTone::Secondary>
                    "A starter template for a mobile-oriented Leptos web application."
                </Text>
            </Stack>

            <Card title="Stack">
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Label>"Framework"</Text>
                    <Text tone=TextTone::Secondary>
                        "Leptos (CSR) with leptos_router and leptos_meta"
                    </Text>
                    <Text role=TextRole::Label>"State"</Text>
                    <Text tone=TextTone::Secondary>
                        "A persisted store over localStorage with an explicit allow-list"
                    </Text>
                    <Text role=TextRole::Label>"Networking"</Text>
                    <Text tone=TextTone::Secondary>
                        "gloo-net behind a single client with auth injection and error classification"
                    </Text>
                    <Text role=TextRole::Label>"Serialization"</Text>
                    <Text tone=TextTone::Secondary>"serde and serde_json at every boundary"</Text>
                </Stack>
            </Card>

            <Card title="Features">
                <Stack gap=LayoutGap::Sm>
                    <Text>"Error boundary with user-triggered recovery"</Text>
                    <Text>"Route table with a 404 fallback"</Text>
                    <Text>"Resource-cached queries and mutation actions"</Text>
                    <Text>"Enveloped and bare JSON backends supported transparently"</Text>
                    <Text>"Per-page document head management"</Text>
                </Stack>
            </Card>
        </Stack>
    }
}

//! Home page: exercises the state store, the data-fetching layer, and the
//! transport wrapper side by side.

use leptos::ev::MouseEvent;
use leptos::*;
use leptos_meta::{Meta, Title};
use leptos_router::A;

use api_client::{NewPost, User};
use app_state::{use_app_state, Theme, UserProfile};
use system_ui::prelude::*;

use crate::app::use_api;

const LOCALES: [&str; 2] = ["zh-CN", "en-US"];

fn sample_user() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Example User".to_string(),
        email: "user@example.com".to_string(),
        avatar: None,
    }
}

fn sample_post() -> NewPost {
    NewPost {
        title: "New post title".to_string(),
        body: "Post body text".to_string(),
        user_id: 1,
    }
}

#[component]
/// Landing page.
pub fn HomePage() -> impl IntoView {
    let state = use_app_state();
    let api = use_api();

    let posts_api = api.posts.clone();
    let post = create_local_resource(
        || 1_u64,
        move |id| {
            let api = posts_api.clone();
            async move { api.get(id).await }
        },
    );

    let create_api = api.posts.clone();
    let create_post = create_action(move |input: &NewPost| {
        let api = create_api.clone();
        let input = input.clone();
        async move { api.create(&input).await }
    });
    let create_pending = create_post.pending();
    // A successful mutation invalidates the cached post.
    create_effect(move |_| {
        if matches!(create_post.value().get(), Some(Ok(_))) {
            post.refetch();
        }
    });

    let users_api = api.users.clone();
    let (direct_user, set_direct_user) = create_signal(None::<User>);
    let fetch_user = Callback::new(move |_: MouseEvent| {
        let api = users_api.clone();
        spawn_local(async move {
            match api.get(1).await {
                Ok(user) => set_direct_user.set(Some(user)),
                Err(err) => logging::error!("direct user fetch failed: {err}"),
            }
        });
    });

    view! {
        <Title text="Leptos H5 Template - Home" />
        <Meta name="description" content="Example page exercising the state, query, and transport layers" />

        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="page page-home">
            <Cluster justify=LayoutJustify::Between layout_class="site-nav">
                <Heading>"Leptos H5 Template"</Heading>
                <Cluster gap=LayoutGap::Sm>
                    <A href="/">"Home"</A>
                    <A href="/about">"About"</A>
                </Cluster>
            </Cluster>

            <Card title="App state">
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm>
                        <Text role=TextRole::Label tone=TextTone::Secondary>"User:"</Text>
                        {move || match state.state.get().user {
                            Some(user) => view! {
                                <Cluster gap=LayoutGap::Sm>
                                    <Text>{user.name}</Text>
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Sm
                                        on_click=Callback::new(move |_| state.clear_user())
                                    >
                                        "Sign out"
                                    </Button>
                                </Cluster>
                            }
                            .into_view(),
                            None => view! {
                                <Button
                                    size=ButtonSize::Sm
                                    on_click=Callback::new(move |_| state.set_user(sample_user()))
                                >
                                    "Sign in"
                                </Button>
                            }
                            .into_view(),
                        }}
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Text role=TextRole::Label tone=TextTone::Secondary>"Theme:"</Text>
                        {Theme::ALL
                            .into_iter()
                            .map(|theme| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Sm
                                        selected=Signal::derive(move || {
                                            state.state.get().theme == theme
                                        })
                                        on_click=Callback::new(move |_| state.set_theme(theme))
                                    >
                                        {theme.as_str()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Text role=TextRole::Label tone=TextTone::Secondary>"Locale:"</Text>
                        {LOCALES
                            .into_iter()
                            .map(|locale| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Outline
                                        size=ButtonSize::Sm
                                        selected=Signal::derive(move || {
                                            state.state.get().locale == locale
                                        })
                                        on_click=Callback::new(move |_| state.set_locale(locale))
                                    >
                                        {locale}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Cluster>
                </Stack>
            </Card>

            <Card title="Cached query">
                {move || match post.get() {
                    None => view! { <Text tone=TextTone::Secondary>"Loading…"</Text> }.into_view(),
                    Some(Err(err)) => view! {
                        <Stack gap=LayoutGap::Sm>
                            <Text tone=TextTone::Danger>{format!("error: {err}")}</Text>
                            <Button
                                variant=ButtonVariant::Outline
                                on_click=Callback::new(move |_| post.refetch())
                            >
                                "Retry"
                            </Button>
                        </Stack>
                    }
                    .into_view(),
                    Some(Ok(loaded)) => view! {
                        <Stack gap=LayoutGap::Sm>
                            <Heading>{loaded.title}</Heading>
                            <Text tone=TextTone::Secondary>{loaded.body}</Text>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| post.refetch())
                            >
                                "Refresh"
                            </Button>
                        </Stack>
                    }
                    .into_view(),
                }}
            </Card>

            <Card title="Mutation">
                <Stack gap=LayoutGap::Sm>
                    <Button
                        disabled=create_pending
                        on_click=Callback::new(move |_| {
                            create_post.dispatch(sample_post());
                        })
                    >
                        {move || if create_pending.get() { "Creating…" } else { "Create post" }}
                    </Button>
                    {move || match create_post.value().get() {
                        Some(Ok(created)) => view! {
                            <Badge tone=TextTone::Success>
                                {format!("created post #{}", created.id)}
                            </Badge>
                        }
                        .into_view(),
                        Some(Err(err)) => view! {
                            <Text tone=TextTone::Danger>{format!("create failed: {err}")}</Text>
                        }
                        .into_view(),
                        None => ().into_view(),
                    }}
                </Stack>
            </Card>

            <Card title="Direct request">
                <Stack gap=LayoutGap::Sm>
                    <Button variant=ButtonVariant::Outline on_click=fetch_user>
                        "Fetch user"
                    </Button>
                    {move || {
                        direct_user
                            .get()
                            .map(|user| {
                                view! {
                                    <Stack gap=LayoutGap::None>
                                        <Text>{user.name}</Text>
                                        <Text tone=TextTone::Secondary>{user.email}</Text>
                                    </Stack>
                                }
                            })
                    }}
                </Stack>
            </Card>

            <Card title="Buttons">
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm>
                        <Button variant=ButtonVariant::Primary>"Primary"</Button>
                        <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                        <Button variant=ButtonVariant::Outline>"Outline"</Button>
                        <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                        <Button variant=ButtonVariant::Link>"Link"</Button>
                        <Button variant=ButtonVariant::Danger>"Danger"</Button>
                    </Cluster>
                    <Cluster gap=LayoutGap::Sm>
                        <Button size=ButtonSize::Sm>"Small"</Button>
                        <Button size=ButtonSize::Md>"Default"</Button>
                        <Button size=ButtonSize::Lg>"Large"</Button>
                        <Button disabled=true>"Disabled"</Button>
                    </Cluster>
                </Stack>
            </Card>
        </Stack>
    }
}

//! Root application component and the controller host.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::chat::ChatView;
use crate::components::landing::LandingView;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::session::{Page, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves configuration once, provides the session signal and the API
/// client as context, and mounts the single route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(ApiClient::new(config.api_base_url.clone()));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/repo-doc-bot.css"/>
        <Title text="Repo Doc Bot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Home/>
            </Routes>
        </Router>
    }
}

/// Owns the session and switches between the landing and chat views.
///
/// Views get read-only slices of the session; their callbacks either apply a
/// synchronous transition or spawn the matching `controller` flow.
#[component]
pub fn Home() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();

    let page = Memo::new(move |_| session.with(|s| s.page));

    let on_repo_url = Callback::new(move |url: String| session.update(|s| s.set_repo_url(url)));
    let on_question = Callback::new(move |text: String| session.update(|s| s.set_question(text)));
    let on_toggle_agent = Callback::new(move |enabled: bool| session.update(|s| s.set_use_agent(enabled)));
    let on_back = Callback::new(move |()| crate::controller::go_back(&session));

    let on_ingest = {
        let api = api.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    crate::controller::ingest_repo(&api, &session).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
            }
        })
    };

    let on_use_existing = {
        let api = api.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    crate::controller::use_existing(&api, &session).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
            }
        })
    };

    let on_send = {
        let api = api.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    crate::controller::send_question(&api, &session).await;
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &api;
            }
        })
    };

    let on_approve = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                crate::controller::approve_changes(&api, &session).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &api;
        }
    });

    view! {
        <div class="app-container">
            {move || match page.get() {
                Page::Landing => view! {
                    <LandingView
                        repo_url=Signal::derive(move || session.with(|s| s.repo_url.clone()))
                        loading=Signal::derive(move || session.with(|s| s.loading))
                        status=Signal::derive(move || session.with(|s| s.status.clone()))
                        on_repo_url=on_repo_url
                        on_ingest=on_ingest
                        on_use_existing=on_use_existing
                    />
                }
                .into_any(),
                Page::Chat => view! {
                    <ChatView
                        messages=Signal::derive(move || session.with(|s| s.messages.clone()))
                        question=Signal::derive(move || session.with(|s| s.question.clone()))
                        awaiting_reply=Signal::derive(move || session.with(|s| s.awaiting_reply))
                        use_agent=Signal::derive(move || session.with(|s| s.use_agent))
                        can_approve=Signal::derive(move || session.with(SessionState::can_approve))
                        on_question=on_question
                        on_send=on_send
                        on_toggle_agent=on_toggle_agent
                        on_approve=on_approve
                        on_back=on_back
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

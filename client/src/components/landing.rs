//! Landing card: repository URL input with Ingest / Use Existing actions.
//!
//! Purely presentational. The URL, loading flag and status come in as signals;
//! every change goes back up through the callbacks.

use leptos::prelude::*;

use crate::components::loader::Loader;

#[component]
pub fn LandingView(
    #[prop(into)] repo_url: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] status: Signal<String>,
    on_repo_url: Callback<String>,
    on_ingest: Callback<()>,
    on_use_existing: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card fade-in">
            <h1>"Repo Doc Bot"</h1>
            <p class="subtitle">"AI Assistant for GitHub Repositories"</p>

            <input
                class="input"
                type="text"
                placeholder="https://github.com/user/repo"
                prop:value=move || repo_url.get()
                on:input=move |ev| on_repo_url.run(event_target_value(&ev))
            />

            <div class="btn-group">
                <button
                    class="btn primary"
                    disabled=move || loading.get()
                    on:click=move |_| on_ingest.run(())
                >
                    "Ingest"
                </button>
                <button
                    class="btn secondary"
                    disabled=move || loading.get()
                    on:click=move |_| on_use_existing.run(())
                >
                    "Use Existing"
                </button>
            </div>

            <p class="status">{move || status.get()}</p>

            <Show when=move || loading.get()>
                <Loader/>
            </Show>
        </div>
    }
}

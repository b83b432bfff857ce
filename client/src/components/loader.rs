//! Spinner shown while a landing action is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <div class="loader" role="status" aria-label="Loading"></div> }
}

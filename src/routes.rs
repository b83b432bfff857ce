//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos app is server-rendered at `/` and hydrated from `/pkg`. The
//! classic static pages live under `/classic` and load the same WASM bundle.
//! The doc-bot backend itself is a separate service; nothing here proxies it.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Health check and classic pages. Needs no Leptos configuration.
pub fn static_routes(config: &HostConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service(
            "/classic",
            ServeDir::new(&config.classic_dir).append_index_html_on_directories(true),
        )
}

/// Full host router: static routes + Leptos SSR + compiled assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section / `LEPTOS_*` variables).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

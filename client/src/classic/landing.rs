//! Classic landing page wiring (`/classic/index.html`).

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

use super::dom::{document, element, listen, navigate, set_hidden};
use super::{CHAT_PAGE_PATH, DomStore, LandingControls};
use crate::config::ClientConfig;
use crate::controller;
use crate::net::api::ApiClient;
use crate::state::session::{Page, SessionState};
use crate::state::store::SessionStore;

struct LandingDom {
    repo_input: HtmlInputElement,
    ingest_btn: HtmlButtonElement,
    use_existing_btn: HtmlButtonElement,
    status: HtmlElement,
    spinner: HtmlElement,
}

impl LandingDom {
    fn find(doc: &Document) -> Option<Self> {
        Some(Self {
            repo_input: element(doc, "repo-url")?,
            ingest_btn: element(doc, "ingest-btn")?,
            use_existing_btn: element(doc, "use-existing-btn")?,
            status: element(doc, "ingest-status")?,
            spinner: element(doc, "ingest-spinner")?,
        })
    }

    fn paint(&self, state: &SessionState) {
        let controls = LandingControls::from_session(state);
        self.status.set_text_content(Some(&controls.status));
        self.ingest_btn.set_disabled(controls.buttons_disabled);
        self.use_existing_btn.set_disabled(controls.buttons_disabled);
        set_hidden(&self.spinner, controls.spinner_hidden);
        if self.repo_input.value() != state.repo_url {
            self.repo_input.set_value(&state.repo_url);
        }
    }
}

/// Attach handlers to the classic landing page.
#[wasm_bindgen]
pub fn mount_classic_landing() {
    crate::init_browser_logging();
    let Some(dom) = document().as_ref().and_then(LandingDom::find) else {
        return;
    };
    let dom = Rc::new(dom);
    let store = DomStore::new(SessionState::default(), {
        let dom = Rc::clone(&dom);
        move |s: &SessionState| dom.paint(s)
    });
    let api = ApiClient::new(ClientConfig::from_build_env().api_base_url);

    listen(&dom.repo_input, "input", {
        let store = store.clone();
        let input = dom.repo_input.clone();
        move |_| {
            store.mutate(|s| s.set_repo_url(input.value()));
        }
    });

    listen(&dom.ingest_btn, "click", {
        let store = store.clone();
        let api = api.clone();
        move |_| {
            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller::ingest_repo(&api, &store).await;
                open_chat_if_ready(&store);
            });
        }
    });

    listen(&dom.use_existing_btn, "click", move |_| {
        let store = store.clone();
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller::use_existing(&api, &store).await;
            open_chat_if_ready(&store);
        });
    });

    log::debug!("classic landing mounted");
}

fn open_chat_if_ready(store: &DomStore) {
    if store.snapshot().page == Page::Chat {
        navigate(CHAT_PAGE_PATH);
    }
}

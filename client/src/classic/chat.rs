//! Classic chat page wiring (`/classic/chat.html`).

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::dom::{document, element, listen, navigate, set_hidden};
use super::{ChatControls, DomStore, LANDING_PAGE_PATH, transcript_delta};
use crate::config::ClientConfig;
use crate::controller;
use crate::net::api::ApiClient;
use crate::state::session::{Message, SessionState, Sender};
use crate::state::store::SessionStore;
use crate::util::format::{Segment, format_message};

struct ChatDom {
    doc: Document,
    chat_box: HtmlElement,
    question_input: HtmlInputElement,
    send_btn: HtmlButtonElement,
    spinner: HtmlElement,
    back_btn: Option<HtmlElement>,
    rendered: Cell<usize>,
}

impl ChatDom {
    fn find(doc: &Document) -> Option<Self> {
        Some(Self {
            doc: doc.clone(),
            chat_box: element(doc, "chat-box")?,
            question_input: element(doc, "question-input")?,
            send_btn: element(doc, "send-btn")?,
            spinner: element(doc, "chat-spinner")?,
            back_btn: doc
                .get_element_by_id("back-btn")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            rendered: Cell::new(0),
        })
    }

    fn paint(&self, state: &SessionState) {
        let controls = ChatControls::from_session(state);
        self.send_btn.set_disabled(controls.send_disabled);
        set_hidden(&self.spinner, controls.spinner_hidden);
        if self.question_input.value() != state.question {
            self.question_input.set_value(&state.question);
        }

        let delta = transcript_delta(state.messages.len(), self.rendered.get());
        if delta.reset {
            self.chat_box.set_inner_html("");
        }
        for message in &state.messages[delta.start..] {
            self.append(message);
        }
        if delta.reset || delta.start < state.messages.len() {
            self.chat_box.set_scroll_top(self.chat_box.scroll_height());
        }
        self.rendered.set(state.messages.len());
    }

    fn append(&self, message: &Message) {
        let Ok(bubble) = self.doc.create_element("div") else {
            return;
        };
        match message.sender {
            Sender::User => {
                bubble.set_class_name("chat user");
                bubble.set_text_content(Some(&message.text));
            }
            Sender::Bot => {
                bubble.set_class_name("chat bot");
                for segment in format_message(&message.text) {
                    let (tag, class, text) = match segment {
                        Segment::Code(code) => ("pre", "code-block", code),
                        Segment::Paragraph(line) => ("p", "chat-text", line),
                    };
                    if let Ok(el) = self.doc.create_element(tag) {
                        el.set_class_name(class);
                        el.set_text_content(Some(&text));
                        let _ = bubble.append_child(&el);
                    }
                }
            }
        }
        let _ = self.chat_box.append_child(&bubble);
    }
}

/// Attach handlers to the classic chat page.
#[wasm_bindgen]
pub fn mount_classic_chat() {
    crate::init_browser_logging();
    let Some(dom) = document().as_ref().and_then(ChatDom::find) else {
        return;
    };
    let dom = Rc::new(dom);
    let store = DomStore::new(SessionState::chat(), {
        let dom = Rc::clone(&dom);
        move |s: &SessionState| dom.paint(s)
    });
    let api = ApiClient::new(ClientConfig::from_build_env().api_base_url);

    let send: Rc<dyn Fn()> = {
        let store = store.clone();
        Rc::new(move || {
            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller::send_question(&api, &store).await;
            });
        })
    };

    listen(&dom.question_input, "input", {
        let store = store.clone();
        let input = dom.question_input.clone();
        move |_| {
            store.mutate(|s| s.set_question(input.value()));
        }
    });

    listen(&dom.question_input, "keydown", {
        let send = Rc::clone(&send);
        move |ev| {
            if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Enter") {
                ev.prevent_default();
                send();
            }
        }
    });

    listen(&dom.send_btn, "click", move |_| send());

    if let Some(back_btn) = &dom.back_btn {
        listen(back_btn, "click", move |ev| {
            ev.prevent_default();
            controller::go_back(&store);
            navigate(LANDING_PAGE_PATH);
        });
    }

    log::debug!("classic chat mounted");
}

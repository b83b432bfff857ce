//! Small `web-sys` helpers shared by the classic pages.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget};

pub(super) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up `id` and cast it to the expected element type.
pub(super) fn element<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    let found = doc.get_element_by_id(id);
    if found.is_none() {
        log::warn!("classic page is missing #{id}");
    }
    found?.dyn_into::<T>().ok()
}

/// Attach a listener for the lifetime of the page.
pub(super) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {event} listener");
    }
    // Classic pages never detach their handlers.
    cb.forget();
}

pub(super) fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

pub(super) fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

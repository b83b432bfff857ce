//! Classic pages: the same ingest/chat flows driven by plain DOM handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/classic/index.html` and `/classic/chat.html` are static documents with
//! fixed element ids. Their inline module script loads the WASM bundle and
//! calls `mount_classic_landing` / `mount_classic_chat`, which attach event
//! listeners and run the shared `controller` flows against a [`DomStore`].
//! Every store mutation repaints the page, so guards, status texts and
//! disable/spinner behavior match the Leptos app exactly.


#[cfg(feature = "hydrate")]
mod dom;

#[cfg(feature = "hydrate")]
pub mod chat;
#[cfg(feature = "hydrate")]
pub mod landing;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::session::SessionState;
use crate::state::store::SessionStore;

pub const LANDING_PAGE_PATH: &str = "/classic/";
pub const CHAT_PAGE_PATH: &str = "/classic/chat.html";

/// Session store that repaints the page after every mutation.
#[derive(Clone)]
pub struct DomStore {
    state: Rc<RefCell<SessionState>>,
    paint: Rc<dyn Fn(&SessionState)>,
}

impl DomStore {
    /// Wrap `initial` and paint it once immediately.
    pub fn new(initial: SessionState, paint: impl Fn(&SessionState) + 'static) -> Self {
        let store = Self { state: Rc::new(RefCell::new(initial)), paint: Rc::new(paint) };
        (store.paint)(&store.state.borrow());
        store
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }
}

impl SessionStore for DomStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        let out = f(&mut self.state.borrow_mut());
        (self.paint)(&self.state.borrow());
        Some(out)
    }
}

/// Landing controls derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingControls {
    pub status: String,
    pub buttons_disabled: bool,
    pub spinner_hidden: bool,
}

impl LandingControls {
    pub fn from_session(state: &SessionState) -> Self {
        Self {
            status: state.status.clone(),
            buttons_disabled: state.loading,
            spinner_hidden: !state.loading,
        }
    }
}

/// Chat controls derived from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatControls {
    pub send_disabled: bool,
    pub spinner_hidden: bool,
}

impl ChatControls {
    pub fn from_session(state: &SessionState) -> Self {
        Self { send_disabled: state.awaiting_reply, spinner_hidden: !state.awaiting_reply }
    }
}

/// How to bring a rendered transcript up to date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptDelta {
    /// Clear the container first (the transcript shrank, i.e. was reset).
    pub reset: bool,
    /// Index of the first message to append.
    pub start: usize,
}

pub fn transcript_delta(total: usize, rendered: usize) -> TranscriptDelta {
    if total < rendered {
        TranscriptDelta { reset: true, start: 0 }
    } else {
        TranscriptDelta { reset: false, start: rendered }
    }
}

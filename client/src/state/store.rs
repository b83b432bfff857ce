//! Storage seam between the controller and whatever owns `SessionState`.
//!
//! The Leptos app keeps the session in an `RwSignal`; the classic DOM pages
//! keep it in an `Rc<RefCell<_>>` and repaint after each change. Controller
//! flows are written once against [`SessionStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::session::SessionState;

pub trait SessionStore: Clone + 'static {
    /// Apply `f` to the session. `None` when the backing storage is gone
    /// (for example a disposed signal after the page unmounted).
    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<SessionState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionStore for Rc<RefCell<SessionState>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Boolean flags that disable UI actions while a request is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyFlag {
    Loading,
    AwaitingReply,
}

impl BusyFlag {
    fn set(self, state: &mut SessionState, on: bool) {
        match self {
            Self::Loading => state.loading = on,
            Self::AwaitingReply => state.awaiting_reply = on,
        }
    }
}

/// Raises a [`BusyFlag`] on creation and lowers it on drop, so every exit
/// path of an async flow re-enables the UI.
#[must_use = "the flag is lowered as soon as the guard is dropped"]
pub struct BusyGuard<S: SessionStore> {
    store: S,
    flag: BusyFlag,
}

impl<S: SessionStore> BusyGuard<S> {
    pub fn acquire(store: &S, flag: BusyFlag) -> Self {
        store.mutate(|s| flag.set(s, true));
        Self { store: store.clone(), flag }
    }
}

impl<S: SessionStore> Drop for BusyGuard<S> {
    fn drop(&mut self) {
        let flag = self.flag;
        self.store.mutate(|s| flag.set(s, false));
    }
}

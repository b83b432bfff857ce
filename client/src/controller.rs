//! Async orchestration between the views, the session store and the API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call these flows from event handlers (via `spawn_local`). Each flow
//! runs its synchronous `begin_*` transition first, so optimistic updates such
//! as the user's chat message land before the request leaves, then suspends
//! only at the API call and applies the outcome.
//!
//! ERROR HANDLING
//! ==============
//! Request failures are logged and turned into status text or a bot message.
//! Nothing is returned to the caller.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::DocBotApi;
use crate::state::session::{PendingQuery, QueryKind, SessionState};
use crate::state::store::{BusyFlag, BusyGuard, SessionStore};

/// Ingest the repository URL from the session, opening the chat on success.
pub async fn ingest_repo<A, S>(api: &A, store: &S)
where
    A: DocBotApi + ?Sized,
    S: SessionStore,
{
    let Some(repo_url) = store.mutate(SessionState::begin_ingest).flatten() else {
        return;
    };
    let _loading = BusyGuard::acquire(store, BusyFlag::Loading);

    let outcome = api.ingest(&repo_url).await;
    if let Err(e) = &outcome {
        log::warn!("ingest of {repo_url} failed: {e}");
    }
    store.mutate(move |s| s.finish_ingest(outcome));
}

/// Reuse an index the backend already holds.
pub async fn use_existing<A, S>(api: &A, store: &S)
where
    A: DocBotApi + ?Sized,
    S: SessionStore,
{
    if store.mutate(SessionState::begin_use_existing) != Some(true) {
        return;
    }
    let _loading = BusyGuard::acquire(store, BusyFlag::Loading);

    let outcome = api.has_index().await;
    if let Err(e) = &outcome {
        log::warn!("index lookup failed: {e}");
    }
    store.mutate(move |s| s.finish_use_existing(outcome));
}

/// Send the drafted question in the current mode.
pub async fn send_question<A, S>(api: &A, store: &S)
where
    A: DocBotApi + ?Sized,
    S: SessionStore,
{
    if let Some(pending) = store.mutate(SessionState::begin_send).flatten() {
        deliver(api, store, pending).await;
    }
}

/// Approve the agent's pending change set.
pub async fn approve_changes<A, S>(api: &A, store: &S)
where
    A: DocBotApi + ?Sized,
    S: SessionStore,
{
    if let Some(pending) = store.mutate(SessionState::begin_approval).flatten() {
        deliver(api, store, pending).await;
    }
}

/// Leave the chat and forget the conversation.
pub fn go_back<S: SessionStore>(store: &S) {
    store.mutate(SessionState::go_back);
}

async fn deliver<A, S>(api: &A, store: &S, pending: PendingQuery)
where
    A: DocBotApi + ?Sized,
    S: SessionStore,
{
    let _awaiting = BusyGuard::acquire(store, BusyFlag::AwaitingReply);
    let conversation = pending.conversation;

    match pending.kind {
        QueryKind::Plain { question } => {
            let outcome = api.query(&question).await;
            if let Err(e) = &outcome {
                log::warn!("query failed: {e}");
            }
            store.mutate(move |s| s.finish_query(conversation, outcome));
        }
        QueryKind::Agent { repo_url, question, session_id } => {
            let outcome = api.agent_query(&repo_url, &question, session_id.as_deref()).await;
            if let Err(e) = &outcome {
                log::warn!("agent query failed: {e}");
            }
            store.mutate(move |s| s.finish_agent_query(conversation, outcome));
        }
    }
}

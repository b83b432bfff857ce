//! Session state for the landing → chat flow.
//!
//! DESIGN
//! ======
//! `SessionState` is the single record the controller owns. Every transition
//! is a method here so both front ends (the Leptos app and the classic DOM
//! pages) share the same guards and the same user-facing texts. Async work is
//! split into a synchronous `begin_*` half that validates input and records
//! optimistic changes, and a `finish_*` half that applies the backend outcome.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::api::RequestError;
use crate::net::types::{AgentQueryResponse, HasIndexResponse, QueryResponse};

pub const STATUS_URL_REQUIRED: &str = "Repository URL required";
pub const STATUS_INDEXING: &str = "Indexing repository...";
pub const STATUS_INGEST_FAILED: &str = "Ingestion failed";
pub const STATUS_NO_INDEX: &str = "No index found";
pub const STATUS_BACKEND_UNREACHABLE: &str = "Backend not reachable";
pub const REPLY_SERVER_ERROR: &str = "Server error";

/// Message the agent backend treats as approval of its pending change set.
pub const APPROVE_COMMAND: &str = "APPROVE";

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Landing,
    Chat,
}

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Never mutated once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }
}

/// Everything the UI shows, owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub page: Page,
    pub repo_url: String,
    pub status: String,
    /// Held while ingest or index lookup is in flight.
    pub loading: bool,
    /// Draft text in the chat input.
    pub question: String,
    /// Append-only, in send order.
    pub messages: Vec<Message>,
    pub use_agent: bool,
    pub agent_session_id: Option<String>,
    /// Held while a question is waiting for its reply.
    pub awaiting_reply: bool,
    /// Bumped by `go_back` so replies to an abandoned chat are dropped.
    pub conversation: u64,
}

/// A question accepted by [`SessionState::begin_send`] that still needs a reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    pub conversation: u64,
    pub kind: QueryKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryKind {
    Plain {
        question: String,
    },
    Agent {
        repo_url: String,
        question: String,
        session_id: Option<String>,
    },
}

impl SessionState {
    /// State for a page that opens directly on the chat screen.
    pub fn chat() -> Self {
        Self { page: Page::Chat, ..Self::default() }
    }

    pub fn set_repo_url(&mut self, url: String) {
        self.repo_url = url;
    }

    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    pub fn set_use_agent(&mut self, enabled: bool) {
        self.use_agent = enabled;
    }

    /// Validate the repo URL and mark ingestion as started.
    ///
    /// Returns the trimmed URL to send, or `None` when the request must not go
    /// out (blank URL, or another landing action already in flight).
    pub fn begin_ingest(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        let repo_url = self.repo_url.trim();
        if repo_url.is_empty() {
            self.status = STATUS_URL_REQUIRED.to_owned();
            return None;
        }
        let repo_url = repo_url.to_owned();
        self.status = STATUS_INDEXING.to_owned();
        Some(repo_url)
    }

    pub fn finish_ingest(&mut self, outcome: Result<serde_json::Value, RequestError>) {
        match outcome {
            Ok(_) => {
                self.status.clear();
                self.page = Page::Chat;
            }
            Err(_) => self.status = STATUS_INGEST_FAILED.to_owned(),
        }
    }

    /// Returns `false` when another landing action is already in flight.
    pub fn begin_use_existing(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.status.clear();
        true
    }

    pub fn finish_use_existing(&mut self, outcome: Result<HasIndexResponse, RequestError>) {
        match outcome {
            Ok(HasIndexResponse { has_index: true }) => self.page = Page::Chat,
            Ok(HasIndexResponse { has_index: false }) => self.status = STATUS_NO_INDEX.to_owned(),
            Err(_) => self.status = STATUS_BACKEND_UNREACHABLE.to_owned(),
        }
    }

    /// Accept the drafted question: append it to the transcript, clear the
    /// input and pick the endpoint for the current mode.
    pub fn begin_send(&mut self) -> Option<PendingQuery> {
        let question = self.question.trim().to_owned();
        let pending = self.submit(question)?;
        self.question.clear();
        Some(pending)
    }

    /// Whether the approval shortcut applies: agent mode with a live session.
    pub fn can_approve(&self) -> bool {
        self.use_agent && self.agent_session_id.is_some()
    }

    /// Send [`APPROVE_COMMAND`] through the agent path, leaving the draft alone.
    pub fn begin_approval(&mut self) -> Option<PendingQuery> {
        if !self.can_approve() {
            return None;
        }
        self.submit(APPROVE_COMMAND.to_owned())
    }

    fn submit(&mut self, question: String) -> Option<PendingQuery> {
        if self.awaiting_reply || question.is_empty() {
            return None;
        }
        self.messages.push(Message::user(question.clone()));
        let kind = if self.use_agent {
            QueryKind::Agent {
                repo_url: self.repo_url.trim().to_owned(),
                question,
                session_id: self.agent_session_id.clone(),
            }
        } else {
            QueryKind::Plain { question }
        };
        Some(PendingQuery { conversation: self.conversation, kind })
    }

    pub fn finish_query(&mut self, conversation: u64, outcome: Result<QueryResponse, RequestError>) {
        if conversation != self.conversation {
            return;
        }
        let text = match outcome {
            Ok(resp) => resp.answer,
            Err(_) => REPLY_SERVER_ERROR.to_owned(),
        };
        self.messages.push(Message::bot(text));
    }

    pub fn finish_agent_query(&mut self, conversation: u64, outcome: Result<AgentQueryResponse, RequestError>) {
        if conversation != self.conversation {
            return;
        }
        let text = match outcome {
            Ok(resp) => {
                if let Some(session_id) = resp.session_id {
                    self.agent_session_id = Some(session_id);
                }
                resp.answer
            }
            Err(_) => REPLY_SERVER_ERROR.to_owned(),
        };
        self.messages.push(Message::bot(text));
    }

    /// Return to the landing screen and forget the conversation.
    pub fn go_back(&mut self) {
        self.page = Page::Landing;
        self.messages.clear();
        self.question.clear();
        self.status.clear();
        self.agent_session_id = None;
        self.conversation = self.conversation.wrapping_add(1);
    }
}

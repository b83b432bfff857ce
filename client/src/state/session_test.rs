use super::*;

fn chat_with_agent(session_id: Option<&str>) -> SessionState {
    SessionState {
        page: Page::Chat,
        repo_url: "https://github.com/user/repo".to_owned(),
        use_agent: true,
        agent_session_id: session_id.map(str::to_owned),
        ..SessionState::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_default_is_empty_landing() {
    let state = SessionState::default();
    assert_eq!(state.page, Page::Landing);
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert!(!state.use_agent);
    assert_eq!(state.agent_session_id, None);
}

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Sender::User).unwrap(), "user");
    assert_eq!(serde_json::to_value(Sender::Bot).unwrap(), "bot");
}

// =============================================================
// Ingest
// =============================================================

#[test]
fn begin_ingest_blank_url_sets_required_status() {
    let mut state = SessionState { repo_url: "   ".to_owned(), ..SessionState::default() };
    assert_eq!(state.begin_ingest(), None);
    assert_eq!(state.status, STATUS_URL_REQUIRED);
    assert_eq!(state.page, Page::Landing);
}

#[test]
fn begin_ingest_returns_trimmed_url_and_indexing_status() {
    let mut state = SessionState { repo_url: "  https://github.com/a/b ".to_owned(), ..SessionState::default() };
    assert_eq!(state.begin_ingest().as_deref(), Some("https://github.com/a/b"));
    assert_eq!(state.status, STATUS_INDEXING);
}

#[test]
fn begin_ingest_refuses_while_loading() {
    let mut state = SessionState {
        repo_url: "https://github.com/a/b".to_owned(),
        loading: true,
        ..SessionState::default()
    };
    assert_eq!(state.begin_ingest(), None);
    assert!(state.status.is_empty());
}

#[test]
fn finish_ingest_success_opens_chat() {
    let mut state = SessionState::default();
    state.finish_ingest(Ok(serde_json::json!({ "status": "success" })));
    assert_eq!(state.page, Page::Chat);
    assert!(state.status.is_empty());
}

#[test]
fn finish_ingest_failure_stays_on_landing() {
    let mut state = SessionState::default();
    state.finish_ingest(Err(RequestError::Status(500)));
    assert_eq!(state.page, Page::Landing);
    assert_eq!(state.status, STATUS_INGEST_FAILED);
}

// =============================================================
// Use existing
// =============================================================

#[test]
fn begin_use_existing_clears_status() {
    let mut state = SessionState { status: STATUS_INGEST_FAILED.to_owned(), ..SessionState::default() };
    assert!(state.begin_use_existing());
    assert!(state.status.is_empty());
}

#[test]
fn finish_use_existing_maps_each_outcome() {
    let mut state = SessionState::default();
    state.finish_use_existing(Ok(HasIndexResponse { has_index: false }));
    assert_eq!(state.page, Page::Landing);
    assert_eq!(state.status, STATUS_NO_INDEX);

    state.finish_use_existing(Err(RequestError::Transport("refused".to_owned())));
    assert_eq!(state.page, Page::Landing);
    assert_eq!(state.status, STATUS_BACKEND_UNREACHABLE);

    state.finish_use_existing(Ok(HasIndexResponse { has_index: true }));
    assert_eq!(state.page, Page::Chat);
}

// =============================================================
// Send
// =============================================================

#[test]
fn begin_send_whitespace_is_noop() {
    let mut state = SessionState { question: " \t ".to_owned(), ..SessionState::chat() };
    assert_eq!(state.begin_send(), None);
    assert!(state.messages.is_empty());
    assert_eq!(state.question, " \t ");
}

#[test]
fn begin_send_appends_user_message_and_clears_input() {
    let mut state = SessionState { question: "Q".to_owned(), ..SessionState::chat() };
    let pending = state.begin_send().unwrap();
    assert_eq!(state.messages, vec![Message::user("Q")]);
    assert!(state.question.is_empty());
    assert_eq!(pending.kind, QueryKind::Plain { question: "Q".to_owned() });
}

#[test]
fn begin_send_refuses_while_awaiting_reply() {
    let mut state = SessionState { question: "again".to_owned(), awaiting_reply: true, ..SessionState::chat() };
    assert_eq!(state.begin_send(), None);
    assert_eq!(state.question, "again");
}

#[test]
fn begin_send_in_agent_mode_carries_session() {
    let mut state = chat_with_agent(Some("abc"));
    state.question = "why?".to_owned();
    let pending = state.begin_send().unwrap();
    assert_eq!(
        pending.kind,
        QueryKind::Agent {
            repo_url: "https://github.com/user/repo".to_owned(),
            question: "why?".to_owned(),
            session_id: Some("abc".to_owned()),
        }
    );
}

#[test]
fn finish_query_failure_appends_one_error_and_keeps_user_message() {
    let mut state = SessionState { question: "Q".to_owned(), ..SessionState::chat() };
    let pending = state.begin_send().unwrap();
    state.finish_query(pending.conversation, Err(RequestError::Status(500)));
    assert_eq!(state.messages, vec![Message::user("Q"), Message::bot(REPLY_SERVER_ERROR)]);
}

#[test]
fn finish_query_ignores_reply_after_go_back() {
    let mut state = SessionState { question: "Q".to_owned(), ..SessionState::chat() };
    let pending = state.begin_send().unwrap();
    state.go_back();
    state.finish_query(pending.conversation, Ok(QueryResponse { answer: "late".to_owned() }));
    assert!(state.messages.is_empty());
}

#[test]
fn finish_agent_query_captures_session_id() {
    let mut state = chat_with_agent(None);
    state.finish_agent_query(
        state.conversation,
        Ok(AgentQueryResponse { answer: "done".to_owned(), session_id: Some("abc".to_owned()) }),
    );
    assert_eq!(state.agent_session_id.as_deref(), Some("abc"));
    assert_eq!(state.messages, vec![Message::bot("done")]);
}

#[test]
fn finish_agent_query_without_session_keeps_previous() {
    let mut state = chat_with_agent(Some("abc"));
    state.finish_agent_query(state.conversation, Ok(AgentQueryResponse { answer: "ok".to_owned(), session_id: None }));
    assert_eq!(state.agent_session_id.as_deref(), Some("abc"));
}

#[test]
fn finish_query_never_touches_session_id() {
    let mut state = chat_with_agent(Some("abc"));
    state.finish_query(state.conversation, Ok(QueryResponse { answer: "plain".to_owned() }));
    assert_eq!(state.agent_session_id.as_deref(), Some("abc"));
}

// =============================================================
// Approval
// =============================================================

#[test]
fn begin_approval_requires_agent_session() {
    let mut state = chat_with_agent(None);
    assert!(!state.can_approve());
    assert_eq!(state.begin_approval(), None);
    assert!(state.messages.is_empty());
}

#[test]
fn begin_approval_sends_approve_and_keeps_draft() {
    let mut state = chat_with_agent(Some("s-1"));
    state.question = "half typed".to_owned();
    let pending = state.begin_approval().unwrap();
    assert_eq!(state.messages, vec![Message::user(APPROVE_COMMAND)]);
    assert_eq!(state.question, "half typed");
    assert!(matches!(
        pending.kind,
        QueryKind::Agent { ref question, ref session_id, .. }
            if question == APPROVE_COMMAND && session_id.as_deref() == Some("s-1")
    ));
}

// =============================================================
// Back
// =============================================================

#[test]
fn go_back_resets_conversation() {
    let mut state = chat_with_agent(Some("abc"));
    state.messages.push(Message::user("Q"));
    state.question = "draft".to_owned();
    state.status = "something".to_owned();

    state.go_back();

    assert_eq!(state.page, Page::Landing);
    assert!(state.messages.is_empty());
    assert!(state.question.is_empty());
    assert!(state.status.is_empty());
    assert_eq!(state.agent_session_id, None);
    assert_eq!(state.repo_url, "https://github.com/user/repo");
}

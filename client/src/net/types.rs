//! Wire DTOs for the doc-bot backend.
//!
//! DESIGN
//! ======
//! Field names match the backend's JSON bodies exactly; `session_id` stays an
//! explicit `Option` so an absent session serializes as `null` rather than an
//! empty string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `POST /ingest` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub repo_url: String,
}

/// `GET /has_index` response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasIndexResponse {
    #[serde(default)]
    pub has_index: bool,
}

/// `POST /query` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// `POST /query` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// `POST /agent/query` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentQueryRequest {
    pub repo_url: String,
    pub question: String,
    /// Session issued by a previous agent reply; `null` on the first query.
    pub session_id: Option<String>,
}

/// `POST /agent/query` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentQueryResponse {
    pub answer: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

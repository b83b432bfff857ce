//! REST API helpers for communicating with the doc-bot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`RequestError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`RequestError`]. The variants keep enough detail for the
//! console log; callers collapse them into a single user-facing message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AgentQueryRequest, AgentQueryResponse, HasIndexResponse, IngestRequest, QueryRequest, QueryResponse,
};

pub const INGEST_PATH: &str = "/ingest";
pub const HAS_INDEX_PATH: &str = "/has_index";
pub const QUERY_PATH: &str = "/query";
pub const AGENT_QUERY_PATH: &str = "/agent/query";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Operations the controller needs from the backend.
///
/// `?Send` because browser futures hold JS handles and never leave the UI thread.
#[async_trait(?Send)]
pub trait DocBotApi {
    /// Ask the backend to clone and index `repo_url`. The body is opaque.
    async fn ingest(&self, repo_url: &str) -> Result<serde_json::Value, RequestError>;

    /// Check whether an index already exists.
    async fn has_index(&self) -> Result<HasIndexResponse, RequestError>;

    /// Plain retrieval question.
    async fn query(&self, question: &str) -> Result<QueryResponse, RequestError>;

    /// Stateful agent question, echoing the session issued by the previous reply.
    async fn agent_query(
        &self,
        repo_url: &str,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<AgentQueryResponse, RequestError>;
}

/// HTTP client bound to a fixed backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/query`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET base_url + path`, decoding the JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] on network failure, a non-success status, or an
    /// undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(path);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<T>()
                .await
                .map_err(|e| RequestError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(RequestError::Unavailable)
        }
    }

    /// `POST base_url + path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] on encode failure, network failure, a
    /// non-success status, or an undecodable body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint(path);
            log::debug!("POST {url}");
            // `json` sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(&url)
                .json(body)
                .map_err(|e| RequestError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            check_status(resp.status())?;
            resp.json::<T>()
                .await
                .map_err(|e| RequestError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(RequestError::Unavailable)
        }
    }

    /// `POST /agent/query`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ApiClient::post`].
    pub async fn agent_query(
        &self,
        repo_url: &str,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<AgentQueryResponse, RequestError> {
        let body = agent_query_body(repo_url, question, session_id);
        self.post(AGENT_QUERY_PATH, &body).await
    }
}

#[async_trait(?Send)]
impl DocBotApi for ApiClient {
    async fn ingest(&self, repo_url: &str) -> Result<serde_json::Value, RequestError> {
        let body = IngestRequest { repo_url: repo_url.to_owned() };
        self.post(INGEST_PATH, &body).await
    }

    async fn has_index(&self) -> Result<HasIndexResponse, RequestError> {
        self.get(HAS_INDEX_PATH).await
    }

    async fn query(&self, question: &str) -> Result<QueryResponse, RequestError> {
        let body = QueryRequest { question: question.to_owned() };
        self.post(QUERY_PATH, &body).await
    }

    async fn agent_query(
        &self,
        repo_url: &str,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<AgentQueryResponse, RequestError> {
        ApiClient::agent_query(self, repo_url, question, session_id).await
    }
}

fn agent_query_body(repo_url: &str, question: &str, session_id: Option<&str>) -> AgentQueryRequest {
    AgentQueryRequest {
        repo_url: repo_url.to_owned(),
        question: question.to_owned(),
        session_id: session_id.map(str::to_owned),
    }
}

/// 2xx is success; everything else, redirects included, is a failure.
#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestError::Status(status))
    }
}

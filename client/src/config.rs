//! Client configuration resolved once at startup.
//!
//! The backend base URL is baked in from the build environment
//! (`REPO_DOC_BOT_API_URL`) so the WASM bundle and the SSR render agree on it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Build-time environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "REPO_DOC_BOT_API_URL";

/// Backend used when no base URL was configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve configuration from the environment captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("REPO_DOC_BOT_API_URL"))
    }

    /// Resolve configuration from an optional raw base URL.
    ///
    /// Blank values fall back to [`DEFAULT_API_BASE_URL`]; trailing slashes are
    /// dropped so endpoint paths can be appended verbatim.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

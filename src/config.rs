//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `CLASSIC_DIR`: directory holding the classic static pages, default
//!   `public/classic` next to this crate's manifest

use std::path::PathBuf;

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub classic_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (the process environment in
    /// production, a fixed map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| HostError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let classic_dir = lookup("CLASSIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_classic_dir, PathBuf::from);
        Ok(Self { port, classic_dir })
    }
}

pub fn default_classic_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public/classic")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

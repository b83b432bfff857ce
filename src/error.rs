//! Host startup and serve errors.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}

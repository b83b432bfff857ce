//! Networking modules for the doc-bot HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and defines the `DocBotApi` seam the
//! controller depends on; `types` defines the JSON wire schema.

pub mod api;
pub mod types;

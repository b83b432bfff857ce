//! Presentational components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views read session fields through signals handed down by `app::Home` and
//! report user intent through callbacks; none of them touch shared state.

pub mod chat;
pub mod landing;
pub mod loader;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the one state record and its transitions; `store` is the
//! seam that lets the same transitions run against a Leptos signal or a plain
//! `RefCell` behind the classic DOM pages.

pub mod session;
pub mod store;
